use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::{CacheError, CacheRepository, keys};
use crate::models::UserProfile;

struct Entry {
    value: String,
    /// `None` 表示过期时间超出 `Instant` 可表示范围，视为永不过期
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// 进程内缓存，与 Redis 后端行为一致：按键过期、值以 JSON 存储
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    key_expiration: Duration,
    session_expiration: Duration,
}

impl MemoryCache {
    pub fn new(key_expiration: Duration, session_expiration: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            key_expiration,
            session_expiration,
        }
    }

    /// 写入前清理已过期的条目，未被再次读取的键也不会长期占用内存
    fn put(&self, key: String, value: String, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(
            key,
            Entry {
                value,
                expires_at: now.checked_add(ttl),
            },
        );
    }

    fn fetch(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if entry.is_live(Instant::now()) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }
}

#[async_trait]
impl CacheRepository for MemoryCache {
    async fn set(&self, username: &str, profile: &UserProfile) -> Result<(), CacheError> {
        let json = serde_json::to_string(profile)?;
        self.put(keys::user_details_key(username), json, self.key_expiration);
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<UserProfile>, CacheError> {
        match self.fetch(&keys::user_details_key(username)) {
            Some(json) => {
                let profile: UserProfile = serde_json::from_str(&json)?;
                Ok(Some(profile).filter(|p| !p.is_empty()))
            }
            None => Ok(None),
        }
    }

    async fn set_session(&self, token: &str, flag: i64) -> Result<(), CacheError> {
        let json = serde_json::to_string(&flag)?;
        self.put(keys::session_key(token), json, self.session_expiration);
        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<i64>, CacheError> {
        match self.fetch(&keys::session_key(token)) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
