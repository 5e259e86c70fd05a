pub mod analyzer;
pub mod auth;
pub mod chat;
pub mod exports;
pub mod info;
pub mod messages;
pub mod projects;
pub mod system;
pub mod teacher;
pub mod users;
pub mod wizard;

pub use analyzer::AnalyzerService;
pub use auth::AuthService;
pub use chat::ChatService;
pub use exports::ExportService;
pub use info::InfoService;
pub use messages::MessageService;
pub use projects::ProjectService;
pub use system::SystemService;
pub use teacher::TeacherService;
pub use users::UserService;
pub use wizard::WizardService;

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use std::sync::Arc;

use crate::ai::TextGenerator;
use crate::cache::ObjectCache;
use crate::documents::GeneratedFile;
use crate::middlewares::RequireJWT;
use crate::models::users::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从应用数据中取出共享组件（存储、缓存、文本生成器）
fn shared<T: ?Sized + 'static>(request: &HttpRequest) -> actix_web::Result<Arc<T>> {
    request
        .app_data::<web::Data<Arc<T>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!(
                "{} is missing from app data",
                std::any::type_name::<T>()
            );
            actix_web::error::ErrorInternalServerError("Application state is not configured")
        })
}

pub(crate) fn storage_of(request: &HttpRequest) -> actix_web::Result<Arc<dyn Storage>> {
    shared::<dyn Storage>(request)
}

pub(crate) fn cache_of(request: &HttpRequest) -> actix_web::Result<Arc<dyn ObjectCache>> {
    shared::<dyn ObjectCache>(request)
}

pub(crate) fn generator_of(request: &HttpRequest) -> actix_web::Result<Arc<dyn TextGenerator>> {
    shared::<dyn TextGenerator>(request)
}

/// RequireJWT 之后的处理函数用来取当前用户
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Oturum açmanız gerekiyor.",
        ))
    })
}

pub(crate) fn internal_error(code: ErrorCode, context: &str, err: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        code,
        "Sunucu hatası oluştu, lütfen tekrar deneyin.",
    ))
}

pub(crate) fn download(file: GeneratedFile) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, file.content_type))
        .insert_header(file.content_disposition())
        .body(file.bytes)
}

#[cfg(test)]
pub(crate) mod test_support;
