use super::entities::ChatRole;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct SendChatRequest {
    #[serde(default)]
    pub text: String,
}

// 浮动助手的单条历史
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct AssistantTurn {
    pub role: ChatRole,
    pub text: String,
}

// 浮动助手请求：历史由客户端维护，最后一条为新消息
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct QuickAssistantRequest {
    #[serde(default)]
    pub messages: Vec<AssistantTurn>,
}

// 新增对话记录（存储层）
#[derive(Debug, Clone)]
pub struct CreateChatMessageRequest {
    pub username: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: i64,
}
