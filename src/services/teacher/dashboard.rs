use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DASHBOARD_POLL_INTERVAL_SECS, TeacherService};
use crate::errors::Result;
use crate::models::teacher::responses::TeacherDashboardResponse;
use crate::models::users::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};
use crate::storage::Storage;

async fn collect(storage: &dyn Storage, teacher: &User) -> Result<TeacherDashboardResponse> {
    let students = storage.list_students_by_advisor(&teacher.username).await?;
    let usernames: Vec<String> = students.iter().map(|s| s.username.clone()).collect();
    let submitted_projects = storage.list_submitted_projects(&usernames).await?;
    let messages = storage.list_messages_to(&teacher.username).await?;

    Ok(TeacherDashboardResponse {
        students,
        submitted_projects,
        messages,
        poll_interval_secs: DASHBOARD_POLL_INTERVAL_SECS,
    })
}

pub async fn dashboard(
    _service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    match collect(storage.as_ref(), &teacher).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Panel verileri alındı."))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to load teacher dashboard",
            e,
        )),
    }
}
