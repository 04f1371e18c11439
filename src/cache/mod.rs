// 缓存模块
// 用户资料和会话令牌的读写，支持 Redis 与进程内两种后端

use async_trait::async_trait;

use crate::models::UserProfile;

pub mod keys;
pub mod memory;
pub mod operations;

pub use memory::MemoryCache;
pub use operations::RedisCache;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 缓存存储接口
///
/// 未命中不视为错误，返回 `None`；只有后端故障才返回 `Err`。
#[async_trait]
pub trait CacheRepository: Send + Sync {
    /// 按用户名写入资料，使用资料过期时间
    async fn set(&self, username: &str, profile: &UserProfile) -> Result<(), CacheError>;

    async fn get(&self, username: &str) -> Result<Option<UserProfile>, CacheError>;

    /// 写入会话标记，使用会话过期时间
    async fn set_session(&self, token: &str, flag: i64) -> Result<(), CacheError>;

    async fn get_session(&self, token: &str) -> Result<Option<i64>, CacheError>;
}
