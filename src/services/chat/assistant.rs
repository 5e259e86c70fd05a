use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChatService;
use crate::ai::prompts::{ASSISTANT_EMPTY_REPLY, ASSISTANT_ERROR_REPLY, KACKAR_PROMPT};
use crate::ai::{ChatTurn, GenerationRequest};
use crate::config::AppConfig;
use crate::models::chat::{ChatRole, requests::QuickAssistantRequest, responses::QuickAssistantResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::generator_of;

pub async fn quick_assistant(
    _service: &ChatService,
    body: QuickAssistantRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let generator = generator_of(request)?;

    let contents: Vec<ChatTurn> = body
        .messages
        .into_iter()
        .filter(|turn| !turn.text.trim().is_empty())
        .map(|turn| ChatTurn { role: turn.role, text: turn.text })
        .collect();

    // 最后一条必须是用户的新消息
    if contents.last().is_none_or(|turn| turn.role != ChatRole::User) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ChatMessageInvalid,
            "Mesaj boş olamaz.",
        )));
    }

    let generation =
        GenerationRequest::conversation(KACKAR_PROMPT, contents, AppConfig::get().ai.temperature);
    let reply = match generator.generate(generation).await {
        Ok(text) if text.trim().is_empty() => ASSISTANT_EMPTY_REPLY.to_string(),
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Assistant generation failed: {}", e);
            ASSISTANT_ERROR_REPLY.to_string()
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        QuickAssistantResponse { reply },
        "Yanıt alındı.",
    )))
}
