use super::entities::ChatMessage;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct ChatHistoryResponse {
    pub items: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct SendChatResponse {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct QuickAssistantResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct ClearHistoryResponse {
    pub deleted: u64,
}
