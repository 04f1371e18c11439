use std::sync::Arc;

use rand::RngCore;

use crate::{cache::CacheRepository, error::AppError};

/// 有效会话在缓存中的标记值
pub const SESSION_FLAG: i64 = 1;

/// 会话令牌的签发与校验
#[derive(Clone)]
pub struct SessionService {
    session_store: Arc<dyn CacheRepository>,
    token_length: usize,
}

impl SessionService {
    pub fn new(session_store: Arc<dyn CacheRepository>, token_length: usize) -> Self {
        Self {
            session_store,
            token_length,
        }
    }

    /// 生成随机令牌（十六进制编码）并写入缓存
    pub async fn generate_token(&self) -> Result<String, AppError> {
        let token = random_hex(self.token_length);

        self.session_store
            .set_session(&token, SESSION_FLAG)
            .await
            .map_err(|e| {
                tracing::error!(layer = "session", "failed to store session: {}", e);
                AppError::ServiceUnavailable
            })?;

        Ok(token)
    }

    pub async fn verify_token(&self, token: &str) -> Result<(), AppError> {
        if token.is_empty() {
            return Err(AppError::SessionNotFound);
        }

        let flag = self.session_store.get_session(token).await.map_err(|e| {
            tracing::error!(layer = "session", "failed to read session: {}", e);
            AppError::ServiceUnavailable
        })?;

        match flag {
            Some(SESSION_FLAG) => Ok(()),
            _ => Err(AppError::SessionNotFound),
        }
    }
}

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);

    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
