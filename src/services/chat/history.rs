use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChatService;
use crate::models::chat::responses::{ChatHistoryResponse, ClearHistoryResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};

pub async fn history(_service: &ChatService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    match storage.list_chat_history(&user.username).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChatHistoryResponse { items },
            "Sohbet geçmişi alındı.",
        ))),
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to load chat history", e)),
    }
}

pub async fn clear_history(_service: &ChatService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    match storage.clear_chat_history(&user.username).await {
        Ok(deleted) => {
            tracing::info!("Cleared {} chat messages of {}", deleted, user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClearHistoryResponse { deleted },
                "Sohbet geçmişi temizlendi.",
            )))
        }
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to clear chat history", e)),
    }
}
