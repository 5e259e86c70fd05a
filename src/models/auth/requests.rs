use crate::models::users::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 注册请求（仅允许学生和教师）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    /// 学生填写的指导教师用户名
    #[serde(default)]
    pub advisor_username: Option<String>,
}

// 个人资料更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UpdateProfileRequest {
    /// 为空时保留原密码
    #[serde(default)]
    pub new_password: Option<String>,
    #[serde(default)]
    pub advisor_username: Option<String>,
}
