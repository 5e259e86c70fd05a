use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/info.ts")]
pub struct Category {
    pub title: &'static str,
    pub description: &'static str,
    pub tag: Option<&'static str>,
}

// 按教育阶段分组的比赛类别
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/info.ts")]
pub struct CategoryGroup {
    pub level: &'static str,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/info.ts")]
pub struct ResearchTool {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/info.ts")]
pub struct GuideStep {
    pub id: u8,
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/info.ts")]
pub struct GuideItem {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/info.ts")]
pub struct GuideResponse {
    pub steps: Vec<GuideStep>,
    pub principles: Vec<GuideItem>,
    pub methodology: Vec<GuideItem>,
    pub critical_notes: Vec<&'static str>,
}
