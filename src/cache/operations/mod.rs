/// Redis 缓存操作

// 用户资料缓存操作
pub mod user;

// 会话缓存操作
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::Client as RedisClient;

use super::{CacheError, CacheRepository};
use crate::models::UserProfile;

/// 基于 Redis 的缓存实现
#[derive(Clone)]
pub struct RedisCache {
    redis: Arc<RedisClient>,
    key_expiration: Duration,
    session_expiration: Duration,
}

impl RedisCache {
    pub fn new(redis: Arc<RedisClient>, key_expiration: Duration, session_expiration: Duration) -> Self {
        Self {
            redis,
            key_expiration,
            session_expiration,
        }
    }
}

#[async_trait]
impl CacheRepository for RedisCache {
    async fn set(&self, username: &str, profile: &UserProfile) -> Result<(), CacheError> {
        user::cache_profile(&self.redis, username, profile, self.key_expiration).await
    }

    async fn get(&self, username: &str) -> Result<Option<UserProfile>, CacheError> {
        user::get_cached_profile(&self.redis, username).await
    }

    async fn set_session(&self, token: &str, flag: i64) -> Result<(), CacheError> {
        session::cache_session(&self.redis, token, flag, self.session_expiration).await
    }

    async fn get_session(&self, token: &str) -> Result<Option<i64>, CacheError> {
        session::get_session(&self.redis, token).await
    }
}

/// 过期时间至少 1 秒，SET EX 不接受 0
fn ttl_secs(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}
