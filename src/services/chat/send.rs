use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChatService;
use crate::ai::prompts::{CHAT_EMPTY_REPLY, CONNECTION_ERROR_REPLY, SYSTEM_PROMPT};
use crate::ai::{ChatTurn, GenerationRequest};
use crate::config::AppConfig;
use crate::models::chat::{
    ChatMessage, ChatRole,
    requests::{CreateChatMessageRequest, SendChatRequest},
    responses::SendChatResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, generator_of, internal_error, storage_of};
use crate::utils::validate::require_text;

pub async fn send(
    _service: &ChatService,
    body: SendChatRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;
    let generator = generator_of(request)?;

    let Some(text) = require_text(&body.text) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ChatMessageInvalid,
            "Mesaj boş olamaz.",
        )));
    };

    // 先读历史再写入新消息，避免重复
    let history = match storage.list_chat_history(&user.username).await {
        Ok(history) => history,
        Err(e) => return Ok(internal_error(ErrorCode::InternalServerError, "Failed to load chat history", e)),
    };

    let user_message = match storage
        .append_chat_message(CreateChatMessageRequest {
            username: user.username.clone(),
            role: ChatRole::User,
            text: text.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
        .await
    {
        Ok(message) => message,
        Err(e) => return Ok(internal_error(ErrorCode::InternalServerError, "Failed to store chat message", e)),
    };

    let mut contents: Vec<ChatTurn> = history
        .into_iter()
        .map(|m| ChatTurn { role: m.role, text: m.text })
        .collect();
    contents.push(ChatTurn::user(text));

    let generation = GenerationRequest::conversation(
        SYSTEM_PROMPT,
        contents,
        AppConfig::get().ai.temperature,
    );

    let reply = match generator.generate(generation).await {
        Ok(reply_text) => {
            let reply_text = if reply_text.trim().is_empty() {
                CHAT_EMPTY_REPLY.to_string()
            } else {
                reply_text
            };
            match storage
                .append_chat_message(CreateChatMessageRequest {
                    username: user.username.clone(),
                    role: ChatRole::Model,
                    text: reply_text,
                    timestamp: chrono::Utc::now().timestamp_millis(),
                })
                .await
            {
                Ok(message) => message,
                Err(e) => {
                    return Ok(internal_error(
                        ErrorCode::InternalServerError,
                        "Failed to store model reply",
                        e,
                    ));
                }
            }
        }
        Err(e) => {
            // 连接失败的提示只返回给客户端，不写入记录
            tracing::warn!("Chat generation failed for {}: {}", user.username, e);
            ChatMessage::transient(ChatRole::Model, CONNECTION_ERROR_REPLY)
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SendChatResponse { user_message, reply },
        "Mesaj gönderildi.",
    )))
}
