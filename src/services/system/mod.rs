use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::config::AppConfig;
use crate::models::system::{HealthResponse, SystemSettingsResponse};
use crate::models::{ApiResponse, AppStartTime};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    /// 存活检查与运行时长
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let started_at = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|start| start.start_datetime);
        let uptime_secs = started_at
            .map(|start| (chrono::Utc::now() - start).num_seconds())
            .unwrap_or_default();

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                started_at,
                uptime_secs,
            },
            "Servis çalışıyor.",
        )))
    }

    // 获取公开系统设置（只读）
    pub async fn get_settings(&self) -> ActixResult<HttpResponse> {
        let config = self.get_config();

        let response = SystemSettingsResponse {
            system_name: config.app.system_name.clone(),
            environment: config.app.environment.clone(),
            max_file_size: config.upload.max_size as u64,
            allowed_file_types: config.upload.allowed_types.clone(),
            ai_rate_limit_per_minute: config.ai.rate_limit_per_minute,
        };

        Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Ayarlar alındı.")))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};

    use crate::services::test_support::{TestContext, call_json, init_app};

    #[actix_web::test]
    async fn health_and_settings_are_public() {
        let ctx = TestContext::new().await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(app, ctx.request(Method::GET, "/api/v1/system/health"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "ok");

        let (status, body) = call_json!(app, ctx.request(Method::GET, "/api/v1/system/settings"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["allowed_file_types"][0], ".pdf");
    }
}
