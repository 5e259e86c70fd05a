use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use super::students::advised_student;
use crate::catalog::feedback::{FEEDBACK_PRESETS, format_feedback};
use crate::models::messages::requests::CreateMessageRequest;
use crate::models::teacher::requests::QuickFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error, storage_of};
use crate::utils::validate::require_text;

pub async fn quick_feedback(
    _service: &TeacherService,
    student_username: String,
    body: QuickFeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;

    let Some(status_label) = require_text(&body.status_label) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MessageInvalid,
            "Değerlendirme durumu boş olamaz.",
        )));
    };

    let student = match advised_student(storage.as_ref(), &teacher, &student_username).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    let message = CreateMessageRequest {
        from_username: teacher.username.clone(),
        to_username: student.username.clone(),
        text: format_feedback(status_label, body.text.trim()),
    };

    match storage.create_message(message).await {
        Ok(message) => {
            tracing::info!("Teacher {} sent feedback to {}", teacher.username, student.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                message,
                "Geri bildirim öğrenciye gönderildi!",
            )))
        }
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to store feedback", e)),
    }
}

pub async fn feedback_presets(_service: &TeacherService) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        FEEDBACK_PRESETS.to_vec(),
        "Hazır değerlendirmeler alındı.",
    )))
}
