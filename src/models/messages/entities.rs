use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 留言（教师评价或普通消息）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct Message {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
