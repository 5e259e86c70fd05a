use serde::Deserialize;
use ts_rs::TS;

// 快速评价请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct QuickFeedbackRequest {
    pub status_label: String,
    #[serde(default)]
    pub text: String,
}
