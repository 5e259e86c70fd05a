pub mod dashboard;
pub mod feedback;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::teacher::requests::QuickFeedbackRequest;

/// 客户端刷新教师面板的间隔
pub const DASHBOARD_POLL_INTERVAL_SECS: u64 = 10;

pub struct TeacherService;

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 指导的学生、已提交项目与收到的留言
    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::dashboard(self, request).await
    }

    pub async fn student_projects(
        &self,
        student_username: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::student_projects(self, student_username, request).await
    }

    pub async fn quick_feedback(
        &self,
        student_username: String,
        body: QuickFeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        feedback::quick_feedback(self, student_username, body, request).await
    }

    pub async fn feedback_presets(&self) -> ActixResult<HttpResponse> {
        feedback::feedback_presets(self).await
    }
}
