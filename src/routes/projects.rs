use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::projects::requests::{ExportProjectQuery, SaveProjectRequest};
use crate::models::users::entities::UserRole;
use crate::services::ProjectService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ProjectService 实例
static PROJECT_SERVICE: Lazy<ProjectService> = Lazy::new(ProjectService::new_lazy);

pub async fn list_my_projects(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.list_my_projects(&req).await
}

pub async fn save_project(
    req: HttpRequest,
    project_data: web::Json<SaveProjectRequest>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.save_project(project_data.into_inner(), &req).await
}

pub async fn get_project(req: HttpRequest, project_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.get_project(project_id.0, &req).await
}

pub async fn delete_project(req: HttpRequest, project_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.delete_project(project_id.0, &req).await
}

pub async fn export_project(
    req: HttpRequest,
    project_id: SafeIDI64,
    query: web::Query<ExportProjectQuery>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE
        .export_project(project_id.0, query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/projects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route(web::get().to(list_my_projects))
                    .route(web::post().to(save_project)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_project))
                    .route(web::delete().to(delete_project)),
            )
            .service(
                web::resource("/{id}/export")
                    .wrap(middlewares::RateLimit::documents())
                    .route(web::get().to(export_project)),
            ),
    );
}
