pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::projects::Project;
use crate::models::projects::requests::{ExportProjectQuery, SaveProjectRequest};
use crate::models::users::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct ProjectService;

impl ProjectService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 当前学生的项目
    pub async fn list_my_projects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_projects(self, request).await
    }

    // 新建或更新（草稿 / 提交）
    pub async fn save_project(
        &self,
        body: SaveProjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_project(self, body, request).await
    }

    pub async fn get_project(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_project(self, id, request).await
    }

    pub async fn delete_project(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_project(self, id, request).await
    }

    pub async fn export_project(
        &self,
        id: i64,
        query: ExportProjectQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_project(self, id, query, request).await
    }
}

/// 项目可见性：本人、其指导教师或管理员
pub(crate) async fn can_view(
    storage: &Arc<dyn Storage>,
    viewer: &User,
    project: &Project,
) -> Result<bool> {
    match viewer.role {
        UserRole::Admin => Ok(true),
        UserRole::Student => Ok(project.is_owned_by(&viewer.username)),
        UserRole::Teacher => Ok(storage
            .get_user_by_username(&project.student_username)
            .await?
            .is_some_and(|owner| owner.is_advised_by(&viewer.username))),
    }
}

fn project_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ProjectNotFound,
        "Proje bulunamadı.",
    ))
}

fn permission_denied() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::ProjectPermissionDenied,
        "Bu projeye erişim yetkiniz yok.",
    ))
}

/// 读取项目并校验查看权限
async fn load_visible(
    storage: &Arc<dyn Storage>,
    viewer: &User,
    id: i64,
) -> std::result::Result<Project, HttpResponse> {
    let project = match storage.get_project_by_id(id).await {
        Ok(Some(project)) => project,
        Ok(None) => return Err(project_not_found()),
        Err(e) => {
            return Err(crate::services::internal_error(
                ErrorCode::InternalServerError,
                "Project lookup failed",
                e,
            ));
        }
    };

    match can_view(storage, viewer, &project).await {
        Ok(true) => Ok(project),
        Ok(false) => Err(permission_denied()),
        Err(e) => Err(crate::services::internal_error(
            ErrorCode::InternalServerError,
            "Project permission check failed",
            e,
        )),
    }
}

#[cfg(test)]
mod tests;
