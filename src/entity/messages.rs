//! 留言实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_message(self) -> crate::models::messages::Message {
        crate::models::messages::Message {
            id: self.id,
            from_username: self.from_username,
            to_username: self.to_username,
            text: self.text,
            timestamp: super::from_millis(self.timestamp),
        }
    }
}
