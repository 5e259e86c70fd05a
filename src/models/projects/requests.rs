use super::entities::ProjectStatus;
use crate::models::exports::ExportFormat;
use serde::Deserialize;
use ts_rs::TS;

// 保存项目请求：无 id 时新建，有 id 时更新
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct SaveProjectRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
}

// 导出查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct ExportProjectQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

// 新建项目（存储层）
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub student_username: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
}

// 更新项目（存储层）
#[derive(Debug, Clone)]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
}
