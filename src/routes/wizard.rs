use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::wizard::requests::{GenerateReportRequest, SubmitReportRequest};
use crate::services::WizardService;

// 懒加载的全局 WizardService 实例
static WIZARD_SERVICE: Lazy<WizardService> = Lazy::new(WizardService::new_lazy);

pub async fn questions() -> ActixResult<HttpResponse> {
    WIZARD_SERVICE.questions().await
}

pub async fn generate(
    req: HttpRequest,
    answers: web::Json<GenerateReportRequest>,
) -> ActixResult<HttpResponse> {
    WIZARD_SERVICE.generate(answers.into_inner(), &req).await
}

pub async fn submit(
    req: HttpRequest,
    report: web::Json<SubmitReportRequest>,
) -> ActixResult<HttpResponse> {
    WIZARD_SERVICE.submit(report.into_inner(), &req).await
}

// 配置路由
pub fn configure_wizard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/wizard")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/questions", web::get().to(questions))
            .service(
                web::resource("/generate")
                    .wrap(middlewares::RateLimit::ai())
                    .route(web::post().to(generate)),
            )
            .route("/submit", web::post().to(submit)),
    );
}
