use serde::Deserialize;
use std::collections::HashMap;
use ts_rs::TS;

// 报告生成请求，key 为问题编号 q1..q18
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

// 将生成的报告提交给指导教师
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct SubmitReportRequest {
    #[serde(default)]
    pub answers: HashMap<String, String>,
    #[serde(default)]
    pub report: String,
}
