use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::cache::user_cache_key;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_of, current_user, internal_error, storage_of};

pub async fn delete_user(
    _service: &UserService,
    username: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let admin = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;
    let cache = cache_of(request)?;

    if admin.username == username {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CanNotDeleteCurrentUser,
            "Kendi hesabınızı silemezsiniz.",
        )));
    }

    // 先取到 ID 以便清除缓存
    let target = match storage.get_user_by_username(&username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Kullanıcı bulunamadı.",
            )));
        }
        Err(e) => return Ok(internal_error(ErrorCode::UserDeleteFailed, "User lookup failed", e)),
    };

    match storage.delete_user(&username).await {
        Ok(true) => {
            cache.remove(&user_cache_key(target.id)).await;
            tracing::warn!("Admin {} deleted user {}", admin.username, username);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Kullanıcı silindi.")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Kullanıcı bulunamadı.",
        ))),
        Err(e) => Ok(internal_error(ErrorCode::UserDeleteFailed, "User deletion failed", e)),
    }
}
