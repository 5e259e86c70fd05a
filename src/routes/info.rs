use actix_web::{HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::InfoService;

// 懒加载的全局 InfoService 实例
static INFO_SERVICE: Lazy<InfoService> = Lazy::new(InfoService::new_lazy);

pub async fn categories() -> ActixResult<HttpResponse> {
    INFO_SERVICE.categories().await
}

pub async fn research_tools() -> ActixResult<HttpResponse> {
    INFO_SERVICE.research_tools().await
}

pub async fn guide() -> ActixResult<HttpResponse> {
    INFO_SERVICE.guide().await
}

// 配置路由
pub fn configure_info_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/info")
            .wrap(middleware::Compress::default())
            .wrap(middlewares::RequireJWT)
            .route("/categories", web::get().to(categories))
            .route("/research-tools", web::get().to(research_tools))
            .route("/guide", web::get().to(guide)),
    );
}
