use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::analyzer::requests::ProcessDocumentRequest;
use crate::services::AnalyzerService;

// 懒加载的全局 AnalyzerService 实例
static ANALYZER_SERVICE: Lazy<AnalyzerService> = Lazy::new(AnalyzerService::new_lazy);

pub async fn extract(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    ANALYZER_SERVICE.extract(&req, payload).await
}

pub async fn process(
    req: HttpRequest,
    body: web::Json<ProcessDocumentRequest>,
) -> ActixResult<HttpResponse> {
    ANALYZER_SERVICE.process(body.into_inner(), &req).await
}

// 配置路由
pub fn configure_analyzer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analyzer")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/extract")
                    .wrap(middlewares::RateLimit::documents())
                    .route(web::post().to(extract)),
            )
            .service(
                web::resource("/process")
                    .wrap(middlewares::RateLimit::ai())
                    .route(web::post().to(process)),
            ),
    );
}
