use crate::models::messages::Message;
use crate::models::projects::Project;
use crate::models::users::User;
use serde::Serialize;
use ts_rs::TS;

// 教师面板聚合数据
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherDashboardResponse {
    pub students: Vec<User>,
    pub submitted_projects: Vec<Project>,
    pub messages: Vec<Message>,
    /// 客户端轮询间隔（秒）
    pub poll_interval_secs: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct StudentProjectsResponse {
    pub student: User,
    pub items: Vec<Project>,
}

// 预置评价按钮
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct FeedbackPreset {
    pub status_label: &'static str,
    pub text: &'static str,
}
