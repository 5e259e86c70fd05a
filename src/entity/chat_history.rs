//! AI 对话记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub role: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Username",
        to = "super::users::Column::Username"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_chat_message(self) -> crate::models::chat::ChatMessage {
        use crate::models::chat::{ChatMessage, ChatRole};

        ChatMessage {
            id: Some(self.id),
            role: self.role.parse::<ChatRole>().unwrap_or(ChatRole::User),
            text: self.text,
            timestamp: self.timestamp,
        }
    }
}
