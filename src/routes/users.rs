use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::UserListParams;
use crate::services::UserService;
use crate::utils::SafeUsername;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn user_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.user_stats(&req).await
}

pub async fn delete_user(req: HttpRequest, username: SafeUsername) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(username.0, &req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_users))
                    // 须在 /{username} 之前注册
                    .route("/stats", web::get().to(user_stats))
                    .route("/{username}", web::delete().to(delete_user)),
            ),
    );
}
