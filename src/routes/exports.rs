use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exports::TeamFileRequest;
use crate::services::ExportService;

// 懒加载的全局 ExportService 实例
static EXPORT_SERVICE: Lazy<ExportService> = Lazy::new(ExportService::new_lazy);

pub async fn team_file(body: web::Json<TeamFileRequest>) -> ActixResult<HttpResponse> {
    EXPORT_SERVICE.team_file(body.into_inner()).await
}

// 配置路由
pub fn configure_export_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/team-file")
                    .wrap(middlewares::RateLimit::documents())
                    .route(web::post().to(team_file)),
            ),
    );
}
