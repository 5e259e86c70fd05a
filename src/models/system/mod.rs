use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub uptime_secs: i64,
}

// 前端需要的公开配置
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemSettingsResponse {
    pub system_name: String,
    pub environment: String,
    pub max_file_size: u64,
    pub allowed_file_types: Vec<String>,
    pub ai_rate_limit_per_minute: u32,
}
