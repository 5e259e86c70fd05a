use super::SeaOrmStorage;
use crate::entity::messages::{ActiveModel, Column, Entity as Messages};
use crate::errors::{Result, TeknofestError};
use crate::models::messages::{Message, requests::CreateMessageRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 发送留言
    pub async fn create_message_impl(&self, req: CreateMessageRequest) -> Result<Message> {
        let model = ActiveModel {
            from_username: Set(req.from_username),
            to_username: Set(req.to_username),
            text: Set(req.text),
            timestamp: Set(chrono::Utc::now().timestamp_millis()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("保存留言失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 收件箱（最新在前）
    pub async fn list_messages_to_impl(&self, to_username: &str) -> Result<Vec<Message>> {
        let messages = Messages::find()
            .filter(Column::ToUsername.eq(to_username))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("查询留言失败: {e}")))?;

        Ok(messages.into_iter().map(|m| m.into_message()).collect())
    }
}
