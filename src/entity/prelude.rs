//! 预导入模块，方便使用

pub use super::chat_history::{
    ActiveModel as ChatHistoryActiveModel, Entity as ChatHistory, Model as ChatHistoryModel,
};
pub use super::messages::{
    ActiveModel as MessageActiveModel, Entity as Messages, Model as MessageModel,
};
pub use super::projects::{
    ActiveModel as ProjectActiveModel, Entity as Projects, Model as ProjectModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
