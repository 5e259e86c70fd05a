use crate::config::AppConfig;
use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// 令牌种类，写入 claims 以防 refresh token 被当作 access token 使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // 用户 ID
    pub role: String,
    pub kind: TokenKind,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::from(ErrorKind::InvalidSubject))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> &'static str {
        &AppConfig::get().jwt.secret
    }

    /// access token 有效期
    pub fn access_token_ttl() -> TimeDelta {
        TimeDelta::minutes(AppConfig::get().jwt.access_token_expiry)
    }

    /// refresh token 有效期，“记住我”时使用更长的期限
    pub fn refresh_token_ttl(remember_me: bool) -> TimeDelta {
        let jwt = &AppConfig::get().jwt;
        if remember_me {
            TimeDelta::days(jwt.refresh_token_remember_me_expiry)
        } else {
            TimeDelta::days(jwt.refresh_token_expiry)
        }
    }

    pub fn issue(
        user_id: i64,
        role: &str,
        kind: TokenKind,
        ttl: TimeDelta,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            kind,
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(Self::secret().as_bytes()),
        )
    }

    pub fn generate_access_token(user_id: i64, role: &str) -> Result<String, JwtError> {
        Self::issue(user_id, role, TokenKind::Access, Self::access_token_ttl())
    }

    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_ttl: Option<TimeDelta>,
    ) -> Result<TokenPair, JwtError> {
        let refresh_ttl = refresh_ttl.unwrap_or_else(|| Self::refresh_token_ttl(false));
        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::issue(user_id, role, TokenKind::Refresh, refresh_ttl)?,
        })
    }

    fn verify(token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(Self::secret().as_bytes()),
            &Validation::default(),
        )?
        .claims;
        if claims.kind != expected {
            return Err(JwtError::from(ErrorKind::InvalidToken));
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify(token, TokenKind::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify(token, TokenKind::Refresh)
    }

    /// 用 refresh token 换取新的 access token
    pub fn refresh_access_token(refresh_token: &str) -> Result<String, JwtError> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        Self::generate_access_token(claims.user_id()?, &claims.role)
    }

    pub fn create_refresh_token_cookie(refresh_token: &str, ttl: TimeDelta) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE_NAME, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(ttl.num_seconds()))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    /// 注销时下发的过期 cookie
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE_NAME, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trip() {
        let token = JwtUtils::generate_access_token(42, "STUDENT").unwrap();
        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, "STUDENT");
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let pair = JwtUtils::generate_token_pair(7, "TEACHER", None).unwrap();
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.access_token).is_err());

        let renewed = JwtUtils::refresh_access_token(&pair.refresh_token).unwrap();
        let claims = JwtUtils::verify_access_token(&renewed).unwrap();
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.role, "TEACHER");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let mut token = JwtUtils::generate_access_token(1, "ADMIN").unwrap();
        token.push('x');
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn remember_me_extends_refresh_ttl() {
        assert!(JwtUtils::refresh_token_ttl(true) > JwtUtils::refresh_token_ttl(false));
    }

    #[test]
    fn empty_cookie_expires_immediately() {
        let cookie = JwtUtils::create_empty_refresh_token_cookie();
        assert_eq!(cookie.name(), REFRESH_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.http_only(), Some(true));
    }
}
