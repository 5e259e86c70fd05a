use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 对话角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

impl std::str::FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "model" => Ok(ChatRole::Model),
            _ => Err(format!("Invalid chat role: {s}")),
        }
    }
}

/// 对话记录，写入后不可修改
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct ChatMessage {
    /// 未持久化的消息（如连接失败提示）没有 id
    pub id: Option<i64>,
    pub role: ChatRole,
    pub text: String,
    /// 毫秒时间戳
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn transient(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
