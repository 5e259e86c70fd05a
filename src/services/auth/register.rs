use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use super::login::issue_session;
use crate::errors::TeknofestError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::RegisterRequest,
    users::{UserRole, requests::CreateUserRequest},
};
use crate::services::{internal_error, storage_of};
use crate::utils::password::hash_password;
use crate::utils::validate::{non_blank, validate_password, validate_username};

pub const USERNAME_TAKEN: &str = "Bu kullanıcı adı alınmış.";

fn username_taken() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::UserNameAlreadyExists,
        USERNAME_TAKEN,
    ))
}

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = storage_of(request)?;

    if !register_request.role.can_self_register() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserRoleInvalid,
            "Yönetici hesabı kayıt ekranından oluşturulamaz.",
        )));
    }

    let username = register_request.username.trim().to_string();
    if let Err(msg) = validate_username(&username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserNameInvalid,
            msg,
        )));
    }
    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            msg,
        )));
    }

    match storage.get_user_by_username(&username).await {
        Ok(Some(_)) => return Ok(username_taken()),
        Ok(None) => {}
        Err(e) => return Ok(internal_error(ErrorCode::RegisterFailed, "Username lookup failed", e)),
    }

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error(ErrorCode::RegisterFailed, "Password hashing failed", e)),
    };

    // 仅学生保存指导教师
    let advisor_username = match register_request.role {
        UserRole::Student => non_blank(register_request.advisor_username.as_deref()),
        _ => None,
    };

    let create = CreateUserRequest {
        username,
        password_hash,
        role: register_request.role,
        advisor_username,
    };

    match storage.create_user(create).await {
        Ok(user) => {
            tracing::info!("Registered {} account {}", user.role, user.username);
            Ok(issue_session(
                service,
                user,
                false,
                "Kayıt başarılı.",
                HttpResponse::Created(),
            ))
        }
        // 并发注册时由唯一约束兜底
        Err(TeknofestError::Validation(_)) => Ok(username_taken()),
        Err(e) => Ok(internal_error(ErrorCode::RegisterFailed, "User creation failed", e)),
    }
}
