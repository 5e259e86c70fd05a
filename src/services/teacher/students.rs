use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teacher::responses::StudentProjectsResponse;
use crate::models::users::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};
use crate::storage::Storage;

/// 取出由当前教师指导的学生，否则返回 403
pub(super) async fn advised_student(
    storage: &dyn Storage,
    teacher: &User,
    student_username: &str,
) -> std::result::Result<User, HttpResponse> {
    match storage.get_user_by_username(student_username).await {
        Ok(Some(student)) if student.is_advised_by(&teacher.username) => Ok(student),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::StudentNotAdvised,
            "Bu öğrencinin danışmanı değilsiniz.",
        ))),
        Err(e) => Err(internal_error(ErrorCode::InternalServerError, "Student lookup failed", e)),
    }
}

pub async fn student_projects(
    _service: &TeacherService,
    student_username: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    let student = match advised_student(storage.as_ref(), &teacher, &student_username).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    match storage.list_projects_by_student(&student.username).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentProjectsResponse { student, items },
            "Öğrenci projeleri alındı.",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list student projects",
            e,
        )),
    }
}
