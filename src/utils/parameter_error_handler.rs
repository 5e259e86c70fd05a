use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(cause: String, message: String) -> Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(cause, response).into()
}

/// JSON 请求体解析失败时返回统一响应格式
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload rejected on {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => "İstek gövdesi JSON olmalıdır.".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "İstek gövdesi çok büyük.".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("Geçersiz istek verisi: {e}"),
        other => format!("Geçersiz istek: {other}"),
    };
    bad_request(err.to_string(), message)
}

/// 查询参数解析失败时返回统一响应格式
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string rejected on {}: {}", req.path(), err);
    let message = format!("Geçersiz sorgu parametresi: {err}");
    bad_request(err.to_string(), message)
}
