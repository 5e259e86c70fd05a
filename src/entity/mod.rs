//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 所有时间列均为毫秒时间戳。

pub mod prelude;

pub mod chat_history;
pub mod messages;
pub mod projects;
pub mod users;

use chrono::{DateTime, Utc};

pub(crate) fn from_millis(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ts).unwrap_or_default()
}
