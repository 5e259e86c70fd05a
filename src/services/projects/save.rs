use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProjectService, permission_denied, project_not_found};
use crate::models::projects::{
    ProjectStatus,
    requests::{CreateProjectRequest, SaveProjectRequest, UpdateProjectRequest},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};
use crate::utils::validate::require_text;

pub const MISSING_FIELDS: &str = "Lütfen başlık ve açıklama giriniz.";

fn saved_message(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Submitted => "Projeniz başarıyla öğretmene gönderildi!",
        ProjectStatus::Draft => "Taslak kaydedildi.",
    }
}

pub async fn save_project(
    _service: &ProjectService,
    body: SaveProjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    let (Some(title), Some(_)) = (require_text(&body.title), require_text(&body.description))
    else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProjectInvalid,
            MISSING_FIELDS,
        )));
    };

    let result = match body.id {
        None => storage
            .create_project(CreateProjectRequest {
                student_username: user.username.clone(),
                title: title.to_string(),
                description: body.description.clone(),
                status: body.status,
            })
            .await
            .map(|project| (project, true)),
        Some(id) => {
            match storage.get_project_by_id(id).await {
                Ok(Some(existing)) if existing.is_owned_by(&user.username) => {}
                Ok(Some(_)) => return Ok(permission_denied()),
                Ok(None) => return Ok(project_not_found()),
                Err(e) => {
                    return Ok(internal_error(ErrorCode::ProjectSaveFailed, "Project lookup failed", e));
                }
            }
            match storage
                .update_project(
                    id,
                    UpdateProjectRequest {
                        title: title.to_string(),
                        description: body.description.clone(),
                        status: body.status,
                    },
                )
                .await
            {
                Ok(Some(project)) => Ok((project, false)),
                Ok(None) => return Ok(project_not_found()),
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok((project, created)) => {
            tracing::info!(
                "Student {} saved project {} as {}",
                user.username,
                project.id,
                project.status
            );
            let message = saved_message(project.status);
            let mut builder = if created {
                HttpResponse::Created()
            } else {
                HttpResponse::Ok()
            };
            Ok(builder.json(ApiResponse::success(project, message)))
        }
        Err(e) => Ok(internal_error(ErrorCode::ProjectSaveFailed, "Project save failed", e)),
    }
}
