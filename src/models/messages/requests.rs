use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct SendMessageRequest {
    pub to_username: String,
    #[serde(default)]
    pub text: String,
}

// 新增留言（存储层）
#[derive(Debug, Clone)]
pub struct CreateMessageRequest {
    pub from_username: String,
    pub to_username: String,
    pub text: String,
}
