//! 参考数据展示缓存
//!
//! 只缓存用于展示的参考数据（学期、科目、学生、教师），值以 JSON 字符串保存。

pub mod object_cache;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

pub use object_cache::moka::MokaCacheWrapper;

#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
    /// 删除所有以 `prefix` 开头的键
    async fn remove_prefix(&self, prefix: &str);
    async fn invalidate_all(&self);
}

/// 读取并反序列化，损坏的条目会被删除
pub async fn get_json<T: DeserializeOwned>(cache: &dyn ObjectCache, key: &str) -> Option<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Dropping corrupt cache entry '{}': {}", key, e);
                cache.remove(key).await;
                None
            }
        },
        CacheResult::NotFound => None,
    }
}

/// 序列化后写入
pub async fn insert_json<T: Serialize>(cache: &dyn ObjectCache, key: String, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => cache.insert_raw(key, raw).await,
        Err(e) => warn!("Failed to serialize cache entry '{}': {}", key, e),
    }
}
