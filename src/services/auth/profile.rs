use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::cache::user_cache_key;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::UpdateProfileRequest, responses::UserInfoResponse},
    users::{UserRole, requests::UpdateUserRequest},
};
use crate::services::{cache_of, current_user, internal_error, storage_of};
use crate::utils::password::hash_password;
use crate::utils::validate::{non_blank, validate_password};

pub async fn handle_update_profile(
    _service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = storage_of(request)?;
    let cache = cache_of(request)?;

    let mut update = UpdateUserRequest::default();

    // 密码留空则保留原密码
    if let Some(password) = update_request
        .new_password
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        if let Err(msg) = validate_password(password) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserPasswordInvalid,
                msg,
            )));
        }
        update.password_hash = match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                return Ok(internal_error(ErrorCode::UserUpdateFailed, "Password hashing failed", e));
            }
        };
    }

    // 仅学生账号可修改指导教师，空串表示清除
    if user.role == UserRole::Student
        && let Some(advisor) = update_request.advisor_username.as_deref()
    {
        update.advisor_username = Some(non_blank(Some(advisor)));
    }

    match storage.update_user(user.id, update).await {
        Ok(Some(updated)) => {
            cache.remove(&user_cache_key(user.id)).await;
            tracing::info!("User {} updated profile", updated.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserInfoResponse { user: updated },
                "Profil bilgileriniz güncellendi.",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Kullanıcı bulunamadı.",
        ))),
        Err(e) => Ok(internal_error(ErrorCode::UserUpdateFailed, "Profile update failed", e)),
    }
}
