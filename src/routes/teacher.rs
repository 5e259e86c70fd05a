use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teacher::requests::QuickFeedbackRequest;
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeUsername;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.dashboard(&req).await
}

pub async fn student_projects(
    req: HttpRequest,
    username: SafeUsername,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.student_projects(username.0, &req).await
}

pub async fn quick_feedback(
    req: HttpRequest,
    username: SafeUsername,
    feedback: web::Json<QuickFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .quick_feedback(username.0, feedback.into_inner(), &req)
        .await
}

pub async fn feedback_presets() -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.feedback_presets().await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/dashboard", web::get().to(dashboard))
            .route("/feedback-presets", web::get().to(feedback_presets))
            .route("/students/{username}/projects", web::get().to(student_projects))
            .route("/students/{username}/feedback", web::post().to(quick_feedback)),
    );
}
