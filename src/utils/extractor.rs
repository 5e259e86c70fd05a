use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径中的 `{id}` 参数，解析失败时返回统一错误响应而不是 404
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

/// 路径中的 `{username}` 参数
#[derive(Debug, Clone)]
pub struct SafeUsername(pub String);

fn reject(message: &str) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(message.to_string(), response).into()
}

fn parse_id(raw: Option<&str>) -> Result<i64, actix_web::Error> {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| reject("Geçersiz kimlik numarası."))
}

fn parse_username(raw: Option<&str>) -> Result<String, actix_web::Error> {
    raw.map(str::trim)
        .filter(|s| crate::utils::validate::validate_username(s).is_ok())
        .map(str::to_string)
        .ok_or_else(|| reject("Geçersiz kullanıcı adı."))
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req.match_info().get("id")).map(SafeIDI64))
    }
}

impl FromRequest for SafeUsername {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_username(req.match_info().get("username")).map(SafeUsername))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids_only() {
        assert_eq!(parse_id(Some("15")).unwrap(), 15);
        assert!(parse_id(Some("0")).is_err());
        assert!(parse_id(Some("-3")).is_err());
        assert!(parse_id(Some("abc")).is_err());
        assert!(parse_id(None).is_err());
    }

    #[test]
    fn usernames_must_be_valid() {
        assert_eq!(parse_username(Some("ayse.k")).unwrap(), "ayse.k");
        assert_eq!(parse_username(Some("gülşen")).unwrap(), "gülşen");
        assert!(parse_username(Some("a b")).is_err());
        assert!(parse_username(None).is_err());
    }
}
