use super::entities::Message;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct InboxResponse {
    pub items: Vec<Message>,
}
