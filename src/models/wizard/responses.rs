use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct WizardQuestion {
    pub id: &'static str,
    pub section: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct WizardStep {
    pub number: u8,
    pub title: &'static str,
    pub questions: Vec<WizardQuestion>,
}

// 评分标准
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct ScoringCriterion {
    pub label: &'static str,
    pub score: &'static str,
    pub description: &'static str,
}

// 常见淘汰原因
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct RejectionReason {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct WizardQuestionsResponse {
    pub steps: Vec<WizardStep>,
    pub criteria: Vec<ScoringCriterion>,
    pub rejection_reasons: Vec<RejectionReason>,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wizard.ts")]
pub struct GenerateReportResponse {
    pub report: String,
}
