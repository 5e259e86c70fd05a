use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProjectService;
use crate::models::projects::responses::ProjectListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};

pub async fn list_my_projects(
    _service: &ProjectService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    match storage.list_projects_by_student(&user.username).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProjectListResponse { items },
            "Projeler alındı.",
        ))),
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to list projects", e)),
    }
}
