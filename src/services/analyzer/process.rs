use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyzerService;
use crate::ai::prompts::{ANALYSIS_EMPTY_REPLY, CONNECTION_ERROR_REPLY, document_prompt};
use crate::ai::{GenerationRequest, ModelTier};
use crate::models::analyzer::{requests::ProcessDocumentRequest, responses::ProcessDocumentResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::generator_of;
use crate::utils::validate::require_text;

pub async fn process_document(
    _service: &AnalyzerService,
    body: ProcessDocumentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !body.consent {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ConsentRequired,
            "Metnin yapay zekâ servisine gönderilmesine onay vermelisiniz.",
        )));
    }
    let Some(text) = require_text(&body.text) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Analiz edilecek metin boş olamaz.",
        )));
    };
    let generator = generator_of(request)?;

    let prompt = document_prompt(body.mode, text);
    let result = match generator
        .generate(GenerationRequest::single_prompt(ModelTier::Report, prompt))
        .await
    {
        Ok(result) if result.trim().is_empty() => ANALYSIS_EMPTY_REPLY.to_string(),
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Document analysis failed: {}", e);
            CONNECTION_ERROR_REPLY.to_string()
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ProcessDocumentResponse {
            mode: body.mode,
            result,
        },
        "İşlem tamamlandı.",
    )))
}
