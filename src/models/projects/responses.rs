use super::entities::Project;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct ProjectListResponse {
    pub items: Vec<Project>,
}
