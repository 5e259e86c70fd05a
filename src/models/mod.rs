pub mod analyzer;
pub mod auth;
pub mod chat;
pub mod common;
pub mod exports;
pub mod info;
pub mod messages;
pub mod projects;
pub mod system;
pub mod teacher;
pub mod users;
pub mod wizard;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

use serde::Serialize;

// 程序启动时间
#[derive(Debug, Clone, Serialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    RateLimitExceeded = 1029,

    // 认证
    AuthFailed = 2000,
    RegisterFailed = 2001,

    // 用户
    UserNotFound = 3000,
    UserNameInvalid = 3001,
    UserNameAlreadyExists = 3002,
    UserPasswordInvalid = 3003,
    UserRoleInvalid = 3004,
    UserUpdateFailed = 3005,
    UserDeleteFailed = 3006,
    CanNotDeleteCurrentUser = 3007,

    // 项目报告
    ProjectNotFound = 4000,
    ProjectInvalid = 4001,
    ProjectPermissionDenied = 4002,
    ProjectSaveFailed = 4003,
    StudentNotAdvised = 4004,

    // AI 助手
    ChatMessageInvalid = 5000,
    AiServiceUnavailable = 5001,
    ConsentRequired = 5002,

    // 留言
    MessageInvalid = 6000,
    MessageRecipientNotFound = 6001,

    // 文件与文档
    FileNotFound = 7000,
    FileTypeNotAllowed = 7001,
    FileSizeExceeded = 7002,
    MultifileUploadNotAllowed = 7003,
    DocumentExtractFailed = 7004,
    ExportFailed = 7005,
}
