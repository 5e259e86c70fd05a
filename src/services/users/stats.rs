use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::UserRole;
use crate::models::users::responses::UserStatsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, storage_of};
use crate::storage::Storage;

async fn collect(storage: &dyn Storage) -> crate::errors::Result<UserStatsResponse> {
    let students = storage.count_users_by_role(UserRole::Student).await?;
    let teachers = storage.count_users_by_role(UserRole::Teacher).await?;
    let admins = storage.count_users_by_role(UserRole::Admin).await?;
    Ok(UserStatsResponse {
        total: students + teachers + admins,
        students,
        teachers,
        admins,
    })
}

pub async fn user_stats(_service: &UserService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = storage_of(request)?;

    match collect(storage.as_ref()).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Kullanıcı istatistikleri alındı.",
        ))),
        Err(e) => Ok(internal_error(ErrorCode::InternalServerError, "Failed to count users", e)),
    }
}
