use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::models::SortField;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
    #[error("unknown cache backend {0:?}")]
    UnknownBackend(String),
}

/// 缓存后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_db: i64,
    pub key_expiration_mins: u64,
    pub session_expiration_mins: u64,
    pub github_url: String,
    pub log_level: String,
    pub server_host: String,
    pub server_port: u16,
    pub token_length: usize,
    pub session_required: bool,
    pub sort_field: SortField,
    pub cache_backend: CacheBackend,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，未设置的项使用默认值
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let token_length: usize = parse_or(&lookup, "TOKEN_LENGTH", 16)?;
        if token_length == 0 {
            return Err(ConfigError::Invalid {
                key: "TOKEN_LENGTH",
                value: "0".into(),
            });
        }

        let cache_backend = match text("CACHE_BACKEND", "redis").to_lowercase().as_str() {
            "redis" => CacheBackend::Redis,
            "memory" => CacheBackend::Memory,
            other => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        Ok(Config {
            redis_host: text("REDIS_HOST", "127.0.0.1"),
            redis_port: parse_or(&lookup, "REDIS_PORT", 6379)?,
            redis_db: parse_or(&lookup, "REDIS_DB", 0)?,
            key_expiration_mins: parse_minutes(&lookup, "KEY_EXPIRATION", 2)?,
            session_expiration_mins: parse_minutes(&lookup, "SESSION_EXPIRATION", 5)?,
            github_url: text("GITHUB_URL", "https://api.github.com/users")
                .trim_end_matches('/')
                .to_string(),
            log_level: text("LOG_LEVEL", "info"),
            server_host: text("SERVER_HOST", "0.0.0.0"),
            server_port: parse_or(&lookup, "PORT", 3000)?,
            token_length,
            session_required: parse_or(&lookup, "SESSION_REQUIRED", true)?,
            sort_field: text("SORT_FIELD", "name").parse().unwrap_or_default(),
            cache_backend,
        })
    }

    pub fn redis_url(&self) -> String {
        format!(
            "redis://{}:{}/{}",
            self.redis_host, self.redis_port, self.redis_db
        )
    }

    pub fn key_expiration(&self) -> Duration {
        Duration::from_secs(self.key_expiration_mins.saturating_mul(60))
    }

    pub fn session_expiration(&self) -> Duration {
        Duration::from_secs(self.session_expiration_mins.saturating_mul(60))
    }
}

/// 分钟数换算成秒后不能溢出
fn parse_minutes<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mins = parse_or(lookup, key, default)?;
    match mins.checked_mul(60) {
        Some(_) => Ok(mins),
        None => Err(ConfigError::Invalid {
            key,
            value: mins.to_string(),
        }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.redis_url(), "redis://127.0.0.1:6379/0");
        assert_eq!(config.key_expiration(), Duration::from_secs(120));
        assert_eq!(config.session_expiration(), Duration::from_secs(300));
        assert_eq!(config.token_length, 16);
        assert!(config.session_required);
        assert_eq!(config.sort_field, SortField::Name);
        assert_eq!(config.cache_backend, CacheBackend::Redis);
    }

    #[test]
    fn reads_recognized_options() {
        let config = config_from(&[
            ("REDIS_HOST", "cache"),
            ("REDIS_PORT", "6380"),
            ("REDIS_DB", "3"),
            ("KEY_EXPIRATION", "10"),
            ("GITHUB_URL", "http://upstream/users/"),
            ("PORT", "8080"),
            ("TOKEN_LENGTH", "32"),
            ("SESSION_REQUIRED", "false"),
            ("SORT_FIELD", "login"),
            ("CACHE_BACKEND", "memory"),
        ])
        .unwrap();

        assert_eq!(config.redis_url(), "redis://cache:6380/3");
        assert_eq!(config.key_expiration(), Duration::from_secs(600));
        assert_eq!(config.github_url, "http://upstream/users");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.token_length, 32);
        assert!(!config.session_required);
        assert_eq!(config.sort_field, SortField::Login);
        assert_eq!(config.cache_backend, CacheBackend::Memory);
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = config_from(&[("REDIS_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "REDIS_PORT", .. }));
    }

    #[test]
    fn rejects_expirations_that_overflow_seconds() {
        let huge = u64::MAX.to_string();

        let err = config_from(&[("KEY_EXPIRATION", huge.as_str())]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "KEY_EXPIRATION", .. }));

        let err = config_from(&[("SESSION_EXPIRATION", huge.as_str())]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SESSION_EXPIRATION", .. }));
    }

    #[test]
    fn rejects_zero_token_length() {
        assert!(config_from(&[("TOKEN_LENGTH", "0")]).is_err());
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(matches!(
            config_from(&[("CACHE_BACKEND", "memcached")]),
            Err(ConfigError::UnknownBackend(_))
        ));
    }
}
