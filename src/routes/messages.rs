use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::messages::requests::SendMessageRequest;
use crate::services::MessageService;

// 懒加载的全局 MessageService 实例
static MESSAGE_SERVICE: Lazy<MessageService> = Lazy::new(MessageService::new_lazy);

pub async fn inbox(req: HttpRequest) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.inbox(&req).await
}

pub async fn send_message(
    req: HttpRequest,
    message: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.send_message(message.into_inner(), &req).await
}

// 配置路由
pub fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/messages")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(inbox))
            .route("", web::post().to(send_message)),
    );
}
