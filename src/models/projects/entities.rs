use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 项目状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub enum ProjectStatus {
    Draft,     // 草稿
    Submitted, // 已提交给指导教师
}

impl ProjectStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SUBMITTED: &'static str = "submitted";

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => Self::DRAFT,
            ProjectStatus::Submitted => Self::SUBMITTED,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DRAFT => Ok(ProjectStatus::Draft),
            Self::SUBMITTED => Ok(ProjectStatus::Submitted),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

// 项目报告实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct Project {
    pub id: i64,
    pub student_username: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Project {
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.student_username == username
    }
}
