use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::WizardService;
use crate::catalog::wizard::derive_title;
use crate::models::projects::{ProjectStatus, requests::CreateProjectRequest};
use crate::models::wizard::requests::SubmitReportRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};
use crate::utils::validate::require_text;

pub async fn submit_report(
    _service: &WizardService,
    body: SubmitReportRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    if require_text(&body.report).is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProjectInvalid,
            "Gönderilecek rapor bulunamadı.",
        )));
    }

    let project = CreateProjectRequest {
        student_username: user.username.clone(),
        title: derive_title(&body.answers),
        description: body.report,
        status: ProjectStatus::Submitted,
    };

    match storage.create_project(project).await {
        Ok(project) => {
            tracing::info!("Student {} submitted wizard report {}", user.username, project.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                project,
                "Raporunuz başarıyla danışman öğretmeninize jüri yorumları ile birlikte gönderildi!",
            )))
        }
        Err(e) => Ok(internal_error(ErrorCode::ProjectSaveFailed, "Failed to submit wizard report", e)),
    }
}
