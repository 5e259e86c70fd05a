use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分析模式：评分分析或学术改写
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/analyzer.ts")]
pub enum AnalyzeMode {
    Analyze,
    Rewrite,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analyzer.ts")]
pub struct ProcessDocumentRequest {
    pub mode: AnalyzeMode,
    #[serde(default)]
    pub text: String,
    /// 用户已同意将文本发送至 AI 服务
    #[serde(default)]
    pub consent: bool,
}
