use super::SeaOrmStorage;
use crate::entity::chat_history::{ActiveModel, Column, Entity as ChatHistory};
use crate::errors::{Result, TeknofestError};
use crate::models::chat::{ChatMessage, requests::CreateChatMessageRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 追加一条对话记录
    pub async fn append_chat_message_impl(
        &self,
        req: CreateChatMessageRequest,
    ) -> Result<ChatMessage> {
        let model = ActiveModel {
            username: Set(req.username),
            role: Set(req.role.as_str().to_string()),
            text: Set(req.text),
            timestamp: Set(req.timestamp),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("保存对话记录失败: {e}")))?;

        Ok(result.into_chat_message())
    }

    /// 用户的对话记录（按时间正序，同一时间按写入顺序）
    pub async fn list_chat_history_impl(&self, username: &str) -> Result<Vec<ChatMessage>> {
        let messages = ChatHistory::find()
            .filter(Column::Username.eq(username))
            .order_by_asc(Column::Timestamp)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询对话记录失败: {e}")))?;

        Ok(messages.into_iter().map(|m| m.into_chat_message()).collect())
    }

    /// 清空用户的对话记录
    pub async fn clear_chat_history_impl(&self, username: &str) -> Result<u64> {
        let result = ChatHistory::delete_many()
            .filter(Column::Username.eq(username))
            .exec(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("清空对话记录失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
