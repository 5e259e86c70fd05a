use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{ProjectService, load_visible};
use crate::documents;
use crate::models::ErrorCode;
use crate::models::projects::requests::ExportProjectQuery;
use crate::services::{current_user, download, internal_error, storage_of};

pub async fn export_project(
    _service: &ProjectService,
    id: i64,
    query: ExportProjectQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let viewer = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    let project = match load_visible(&storage, &viewer, id).await {
        Ok(project) => project,
        Err(response) => return Ok(response),
    };

    // 文档生成是 CPU 密集操作
    let format = query.format;
    match web::block(move || documents::project_report(&project, format)).await {
        Ok(Ok(file)) => Ok(download(file)),
        Ok(Err(e)) => Ok(internal_error(ErrorCode::ExportFailed, "Project export failed", e)),
        Err(e) => Ok(internal_error(ErrorCode::ExportFailed, "Export worker failed", e)),
    }
}
