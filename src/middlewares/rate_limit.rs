/*!
 * 速率限制中间件
 *
 * 按固定时间窗口计数，超过上限返回 429。已认证请求按用户计数，
 * 其余按客户端 IP 计数。需要按用户限流时应放在 RequireJWT 内层：
 *
 * ```rust,ignore
 * web::scope("/api/v1/chat")
 *     .wrap(RateLimit::ai())
 *     .wrap(RequireJWT)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 全局速率限制缓存
/// 键: 前缀:身份:窗口序号，值: 窗口内请求计数（窗口不超过一小时）
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(3600))
        .max_capacity(100_000)
        .build()
});

/// 原子地把计数加一并返回新值
async fn increment(cache_key: &str) -> u32 {
    RATE_LIMIT_CACHE
        .entry(cache_key.to_string())
        .and_upsert_with(|current| {
            let count = current.map_or(0, |entry| *entry.value());
            std::future::ready(count.saturating_add(1))
        })
        .await
        .into_value()
}

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.max(1),
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录：5次/分钟/IP
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 注册：3次/分钟/IP
    pub fn register() -> Self {
        Self::new(3, 60).with_prefix("register")
    }

    /// 刷新令牌：10次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new(10, 60).with_prefix("refresh")
    }

    /// AI 生成类接口：按配置，每分钟每用户
    pub fn ai() -> Self {
        Self::new(AppConfig::get().ai.rate_limit_per_minute, 60).with_prefix("ai")
    }

    /// 文档上传与导出：10次/分钟/用户
    pub fn documents() -> Self {
        Self::new(10, 60).with_prefix("documents")
    }

    fn cache_key(&self, identifier: &str, now_secs: u64) -> String {
        let window = now_secs / self.window_secs;
        if self.key_prefix.is_empty() {
            format!("{identifier}:{window}")
        } else {
            format!("{}:{identifier}:{window}", self.key_prefix)
        }
    }
}

/// 客户端 IP：优先连接信息，其次 X-Forwarded-For 首项和 X-Real-IP
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

/// 验证 IP 地址格式是否有效
fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 从请求中提取用户 ID（如果已认证）
fn extract_user_id(req: &ServiceRequest) -> Option<i64> {
    use crate::models::users::User;
    req.extensions().get::<User>().map(|user| user.id)
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Çok fazla istek gönderdiniz, lütfen biraz sonra tekrar deneyin.",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let identifier = extract_user_id(&req)
                .map(|id| format!("user:{id}"))
                .unwrap_or_else(|| format!("ip:{}", extract_client_ip(&req)));
            let now_secs = chrono::Utc::now().timestamp().max(0) as u64;
            let cache_key = limit.cache_key(&identifier, now_secs);

            let current_count = increment(&cache_key).await;
            if current_count > limit.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, limit.max_requests
                );
                let retry_after = limit.window_secs - now_secs % limit.window_secs;
                return Ok(req
                    .into_response(create_rate_limit_response(retry_after).map_into_right_body()));
            }

            let remaining = limit.max_requests - current_count;
            let mut res = srv.call(req).await?;
            if let Ok(value) = HeaderValue::from_str(&remaining.to_string()) {
                res.headers_mut()
                    .insert(HeaderName::from_static("x-ratelimit-remaining"), value);
            }
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let register = RateLimit::register();
        assert_eq!(register.max_requests, 3);

        let ai = RateLimit::ai();
        assert_eq!(ai.max_requests, AppConfig::get().ai.rate_limit_per_minute);
        assert_eq!(ai.key_prefix, "ai");
    }

    #[test]
    fn test_cache_key_changes_per_window() {
        let limit = RateLimit::new(2, 60).with_prefix("ai");
        assert_eq!(limit.cache_key("user:7", 119), "ai:user:7:1");
        assert_eq!(limit.cache_key("user:7", 120), "ai:user:7:2");
        assert_eq!(RateLimit::new(1, 0).window_secs, 1);
    }

    #[actix_web::test]
    async fn concurrent_hits_get_distinct_counts() {
        let key = format!("test:concurrent:{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0));
        let counts = futures_util::future::join_all((0..40).map(|_| increment(&key))).await;

        let mut sorted = counts.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=40).collect::<Vec<u32>>());
        assert_eq!(RATE_LIMIT_CACHE.get(&key).await, Some(40));
    }
}
