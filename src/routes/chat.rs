use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::chat::requests::{QuickAssistantRequest, SendChatRequest};
use crate::services::ChatService;

// 懒加载的全局 ChatService 实例
static CHAT_SERVICE: Lazy<ChatService> = Lazy::new(ChatService::new_lazy);

pub async fn history(req: HttpRequest) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.history(&req).await
}

pub async fn clear_history(req: HttpRequest) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.clear_history(&req).await
}

pub async fn send(req: HttpRequest, message: web::Json<SendChatRequest>) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.send(message.into_inner(), &req).await
}

pub async fn quick_assistant(
    req: HttpRequest,
    conversation: web::Json<QuickAssistantRequest>,
) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.quick_assistant(conversation.into_inner(), &req).await
}

// 配置路由
pub fn configure_chat_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/chat")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/history")
                    .route(web::get().to(history))
                    .route(web::delete().to(clear_history)),
            )
            // AI 接口按用户限流，必须在 RequireJWT 内层
            .service(
                web::resource("/messages")
                    .wrap(middlewares::RateLimit::ai())
                    .route(web::post().to(send)),
            )
            .service(
                web::resource("/assistant")
                    .wrap(middlewares::RateLimit::ai())
                    .route(web::post().to(quick_assistant)),
            ),
    );
}
