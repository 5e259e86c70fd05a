use std::sync::Arc;

use crate::models::{
    chat::{ChatMessage, requests::CreateChatMessageRequest},
    messages::{Message, requests::CreateMessageRequest},
    projects::{
        Project,
        requests::{CreateProjectRequest, UpdateProjectRequest},
    },
    users::{
        User, UserRole,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 列出指定教师指导的学生
    async fn list_students_by_advisor(&self, advisor_username: &str) -> Result<Vec<User>>;
    // 统计某角色的用户数量
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户及其项目、对话记录和留言
    async fn delete_user(&self, username: &str) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 项目报告方法
    async fn create_project(&self, project: CreateProjectRequest) -> Result<Project>;
    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>>;
    async fn update_project(
        &self,
        id: i64,
        update: UpdateProjectRequest,
    ) -> Result<Option<Project>>;
    async fn delete_project(&self, id: i64) -> Result<bool>;
    // 学生的全部项目，按更新时间倒序
    async fn list_projects_by_student(&self, student_username: &str) -> Result<Vec<Project>>;
    // 一组学生已提交的项目
    async fn list_submitted_projects(&self, student_usernames: &[String]) -> Result<Vec<Project>>;

    /// AI 对话记录方法
    async fn append_chat_message(&self, message: CreateChatMessageRequest)
    -> Result<ChatMessage>;
    // 按时间正序
    async fn list_chat_history(&self, username: &str) -> Result<Vec<ChatMessage>>;
    async fn clear_chat_history(&self, username: &str) -> Result<u64>;

    /// 留言方法
    async fn create_message(&self, message: CreateMessageRequest) -> Result<Message>;
    // 发给某用户的留言，按时间倒序
    async fn list_messages_to(&self, to_username: &str) -> Result<Vec<Message>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
