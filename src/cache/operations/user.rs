use std::sync::Arc;
use std::time::Duration;

use redis::{AsyncCommands, Client as RedisClient};

use super::ttl_secs;
use crate::cache::CacheError;
use crate::cache::keys::user_keys;
use crate::models::UserProfile;

/// 将用户资料缓存到 Redis
pub async fn cache_profile(
    redis: &Arc<RedisClient>,
    username: &str,
    profile: &UserProfile,
    ttl: Duration,
) -> Result<(), CacheError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;

    let key = user_keys::user_details_key(username);
    let json = serde_json::to_string(profile)?;

    let _: () = conn.set_ex(key, json, ttl_secs(ttl)).await?;

    Ok(())
}

/// 从 Redis 获取用户资料
pub async fn get_cached_profile(
    redis: &Arc<RedisClient>,
    username: &str,
) -> Result<Option<UserProfile>, CacheError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;

    let key = user_keys::user_details_key(username);
    let result: Option<String> = conn.get(key).await?;

    match result {
        Some(json) => {
            let profile: UserProfile = serde_json::from_str(&json)?;
            // 空记录按未命中处理
            if profile.is_empty() {
                Ok(None)
            } else {
                Ok(Some(profile))
            }
        }
        None => Ok(None),
    }
}
