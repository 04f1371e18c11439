use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::{ClientError, ProfileRepository};
use crate::models::{ProfileLookup, UserProfile};

/// GitHub 用户接口客户端
///
/// 每个用户名发起一次 `GET {base_url}/{username}`，不重试，超时沿用 reqwest 默认值。
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!("profile-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http, base_url })
    }

    fn user_url(&self, username: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }
}

#[async_trait]
impl ProfileRepository for GithubClient {
    async fn get_details(&self, username: &str) -> Result<ProfileLookup, ClientError> {
        let url = self.user_url(username)?;
        tracing::debug!(layer = "client", %url, "requesting user details");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(ProfileLookup::NotFound);
        }
        if !status.is_success() {
            tracing::warn!(layer = "client", username, status = status.as_u16(), "upstream error");
            return Err(ClientError::Status(status.as_u16()));
        }

        let profile: UserProfile = response.json().await.map_err(ClientError::DoesNotExist)?;
        Ok(ProfileLookup::from(profile))
    }
}
