use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
    users::User,
};
use crate::services::{internal_error, storage_of};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

pub const INVALID_CREDENTIALS: &str = "Kullanıcı adı veya şifre yanlış!";

/// 为用户签发令牌并写入 refresh cookie
pub(crate) fn issue_session(
    service: &AuthService,
    user: User,
    remember_me: bool,
    message: &str,
    mut builder: actix_web::HttpResponseBuilder,
) -> HttpResponse {
    let config = service.get_config();
    let refresh_ttl = JwtUtils::refresh_token_ttl(remember_me);

    match user.generate_token_pair(Some(refresh_ttl)) {
        Ok(token_pair) => {
            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 秒
                user,
                created_at: chrono::Utc::now(),
            };
            let refresh_cookie =
                JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_ttl);

            builder
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, message))
        }
        Err(e) => internal_error(ErrorCode::InternalServerError, "Failed to generate JWT token", e),
    }
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = storage_of(request)?;
    let username = login_request.username.trim();

    let user = match storage.get_user_by_username(username).await {
        Ok(Some(user)) if verify_password(&login_request.password, &user.password_hash) => user,
        Ok(_) => {
            tracing::info!("Failed login attempt for '{}'", username);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                INVALID_CREDENTIALS,
            )));
        }
        Err(e) => return Ok(internal_error(ErrorCode::InternalServerError, "Login lookup failed", e)),
    };

    if let Err(e) = storage.update_last_login(user.id).await {
        tracing::warn!("Failed to update last login for {}: {}", user.username, e);
    }

    tracing::info!("User {} logged in", user.username);
    Ok(issue_session(
        service,
        user,
        login_request.remember_me,
        "Giriş başarılı.",
        HttpResponse::Ok(),
    ))
}
