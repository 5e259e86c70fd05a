use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProjectService, load_visible};
use crate::models::ApiResponse;
use crate::services::{current_user, storage_of};

pub async fn get_project(
    _service: &ProjectService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let viewer = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    match load_visible(&storage, &viewer, id).await {
        Ok(project) => Ok(HttpResponse::Ok().json(ApiResponse::success(project, "Proje alındı."))),
        Err(response) => Ok(response),
    }
}
