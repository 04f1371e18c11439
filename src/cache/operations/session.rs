use std::sync::Arc;
use std::time::Duration;

use redis::{AsyncCommands, Client as RedisClient};

use super::ttl_secs;
use crate::cache::CacheError;
use crate::cache::keys::session_keys;

/// 缓存会话标记
pub async fn cache_session(
    redis: &Arc<RedisClient>,
    token: &str,
    flag: i64,
    ttl: Duration,
) -> Result<(), CacheError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;

    let key = session_keys::session_key(token);
    let json = serde_json::to_string(&flag)?;

    let _: () = conn.set_ex(key, json, ttl_secs(ttl)).await?;

    Ok(())
}

/// 获取会话标记
pub async fn get_session(
    redis: &Arc<RedisClient>,
    token: &str,
) -> Result<Option<i64>, CacheError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;

    let key = session_keys::session_key(token);
    let result: Option<String> = conn.get(key).await?;

    match result {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
