use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProjectService, permission_denied, project_not_found};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};

pub async fn delete_project(
    _service: &ProjectService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    // 仅项目所有者可删除
    match storage.get_project_by_id(id).await {
        Ok(Some(project)) if project.is_owned_by(&user.username) => {}
        Ok(Some(_)) => return Ok(permission_denied()),
        Ok(None) => return Ok(project_not_found()),
        Err(e) => return Ok(internal_error(ErrorCode::InternalServerError, "Project lookup failed", e)),
    }

    match storage.delete_project(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Proje silindi."))),
        Ok(false) => Ok(project_not_found()),
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Project deletion failed", e)),
    }
}
