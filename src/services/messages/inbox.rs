use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::models::messages::responses::InboxResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};

pub async fn inbox(_service: &MessageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    match storage.list_messages_to(&user.username).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(InboxResponse { items }, "Mesajlar alındı."))),
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to list messages", e)),
    }
}
