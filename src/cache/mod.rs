//! 进程内对象缓存
//!
//! 目前只用于缓存已认证用户（键为 `user:{id}`），资料变更和删除用户时失效。

pub mod object_cache;

use async_trait::async_trait;
use std::sync::Arc;

pub use object_cache::moka::MokaCacheWrapper;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 用户缓存键
pub fn user_cache_key(user_id: i64) -> String {
    format!("user:{user_id}")
}

/// 创建缓存实例
pub fn create_cache() -> Arc<dyn ObjectCache> {
    Arc::new(MokaCacheWrapper::new())
}
