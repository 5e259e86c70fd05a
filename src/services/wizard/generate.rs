use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::WizardService;
use crate::ai::prompts::REPORT_EMPTY_REPLY;
use crate::ai::sanitize::sanitize_report;
use crate::ai::{GenerationRequest, ModelTier};
use crate::catalog::wizard::build_report_prompt;
use crate::models::wizard::{requests::GenerateReportRequest, responses::GenerateReportResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::generator_of;

pub async fn generate_report(
    _service: &WizardService,
    body: GenerateReportRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let generator = generator_of(request)?;

    let prompt = build_report_prompt(&body.answers);
    let raw = match generator
        .generate(GenerationRequest::single_prompt(ModelTier::Report, prompt))
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Report generation failed: {}", e);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiServiceUnavailable,
                "Rapor oluşturulamadı. Lütfen tekrar deneyin.",
            )));
        }
    };

    let report = if raw.trim().is_empty() {
        REPORT_EMPTY_REPLY.to_string()
    } else {
        sanitize_report(&raw)
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GenerateReportResponse { report },
        "Rapor oluşturuldu.",
    )))
}
