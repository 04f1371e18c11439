// 上游用户资料查询

use async_trait::async_trait;

use crate::models::ProfileLookup;

pub mod github;

pub use github::GithubClient;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("unable to process your request")]
    Transport(#[source] reqwest::Error),
    #[error("upstream responded with status {0}")]
    Status(u16),
    #[error("user does not exist")]
    DoesNotExist(#[source] reqwest::Error),
    #[error("invalid upstream url {0:?}")]
    InvalidUrl(String),
}

/// 用户资料数据源
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_details(&self, username: &str) -> Result<ProfileLookup, ClientError>;
}
