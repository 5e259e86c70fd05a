use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use super::AnalyzerService;
use crate::config::AppConfig;
use crate::documents::extract::{UNSUPPORTED_TYPE, extract_text};
use crate::models::analyzer::responses::ExtractTextResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::utils::file_magic::extension_of;
use crate::utils::validate_magic_bytes;

fn bad_request(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub async fn handle_extract(
    _service: &AnalyzerService,
    _request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let upload = &AppConfig::get().upload;

    let mut uploaded: Option<(String, String, Vec<u8>)> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }
        if uploaded.is_some() {
            return Ok(bad_request(
                ErrorCode::MultifileUploadNotAllowed,
                "Aynı anda yalnızca bir dosya yüklenebilir.",
            ));
        }

        let file_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        // 扩展名必须在允许列表中
        let extension = match extension_of(&file_name) {
            Some(ext) if upload.allowed_types.iter().any(|t| t.to_lowercase() == ext) => ext,
            _ => return Ok(bad_request(ErrorCode::FileTypeNotAllowed, UNSUPPORTED_TYPE)),
        };

        let mut bytes = Vec::new();
        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = chunk?;

            // 第一个 chunk 时验证魔术字节
            if first_chunk {
                first_chunk = false;
                if !validate_magic_bytes(&data, &extension) {
                    return Ok(bad_request(
                        ErrorCode::FileTypeNotAllowed,
                        "Dosya içeriği uzantısıyla uyuşmuyor.",
                    ));
                }
            }

            if bytes.len() + data.len() > upload.max_size {
                return Ok(bad_request(
                    ErrorCode::FileSizeExceeded,
                    "Dosya boyutu izin verilen sınırı aşıyor.",
                ));
            }
            bytes.extend_from_slice(&data);
        }

        if bytes.is_empty() {
            return Ok(bad_request(ErrorCode::FileTypeNotAllowed, "Dosya boş."));
        }
        uploaded = Some((file_name, extension, bytes));
    }

    let Some((file_name, extension, bytes)) = uploaded else {
        return Ok(bad_request(ErrorCode::FileNotFound, "Yüklenecek dosya bulunamadı."));
    };

    // 解析属于 CPU 密集操作
    let max_extracted = AppConfig::get().upload.max_extracted_size;
    let text = match web::block(move || extract_text(&extension, &bytes, max_extracted)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::DocumentExtractFailed,
                e.message(),
            )));
        }
        Err(e) => return Ok(internal_error(ErrorCode::DocumentExtractFailed, "Extraction worker failed", e)),
    };

    let characters = text.chars().count();
    tracing::debug!("Extracted {} characters from {}", characters, file_name);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ExtractTextResponse {
            file_name,
            text,
            characters,
        },
        "Metin çıkarıldı.",
    )))
}
