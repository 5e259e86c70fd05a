use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::models::messages::requests::{CreateMessageRequest, SendMessageRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};
use crate::utils::validate::require_text;

pub async fn send_message(
    _service: &MessageService,
    body: SendMessageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let sender = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    let Some(text) = require_text(&body.text) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MessageInvalid,
            "Mesaj boş olamaz.",
        )));
    };

    let recipient = match storage.get_user_by_username(body.to_username.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::MessageRecipientNotFound,
                "Alıcı bulunamadı.",
            )));
        }
        Err(e) => return Ok(internal_error(ErrorCode::InternalServerError, "Recipient lookup failed", e)),
    };

    let message = CreateMessageRequest {
        from_username: sender.username,
        to_username: recipient.username,
        text: text.to_string(),
    };

    match storage.create_message(message).await {
        Ok(message) => Ok(HttpResponse::Created().json(ApiResponse::success(message, "Mesaj gönderildi."))),
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to store message", e)),
    }
}
