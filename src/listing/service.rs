use std::sync::Arc;

use crate::{
    cache::CacheRepository,
    client::ProfileRepository,
    error::AppError,
    models::{ProfileLookup, SortField, UserProfile},
};

use super::sorter::sort_users;

pub const MIN_USERNAMES: usize = 1;
pub const MAX_USERNAMES: usize = 10;

/// 用户资料聚合服务：先查缓存，未命中再查上游并回填
#[derive(Clone)]
pub struct ListingService {
    repository: Arc<dyn ProfileRepository>,
    caching: Arc<dyn CacheRepository>,
    sort_field: SortField,
}

impl ListingService {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        caching: Arc<dyn CacheRepository>,
        sort_field: SortField,
    ) -> Self {
        Self {
            repository,
            caching,
            sort_field,
        }
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    /// 检查用户名数量是否在 1 到 10 之间
    pub fn validate(&self, usernames: &[String]) -> Result<(), AppError> {
        if !(MIN_USERNAMES..=MAX_USERNAMES).contains(&usernames.len()) {
            return Err(AppError::Validation);
        }
        Ok(())
    }

    pub async fn show_details(&self, usernames: &[String]) -> Result<Vec<UserProfile>, AppError> {
        self.show_details_sorted_by(usernames, self.sort_field).await
    }

    /// 依次查询每个用户名，找不到的直接跳过；结果为空时返回错误
    pub async fn show_details_sorted_by(
        &self,
        usernames: &[String],
        field: SortField,
    ) -> Result<Vec<UserProfile>, AppError> {
        let mut users = Vec::with_capacity(usernames.len());

        for username in usernames {
            tracing::info!(layer = "service", username = %username, "checking cache for existing user details");
            let cached = self.caching.get(username).await.map_err(|e| {
                tracing::error!(layer = "service", "cache read failed: {}", e);
                AppError::ServiceUnavailable
            })?;

            let details = match cached {
                Some(details) => details,
                None => {
                    tracing::info!(layer = "service", username = %username, "pulling user details from api");
                    let details = match self.repository.get_details(username).await {
                        Ok(ProfileLookup::Found(details)) => details,
                        Ok(ProfileLookup::NotFound) => {
                            tracing::info!(layer = "service", username = %username, "user does not exist");
                            continue;
                        }
                        Err(e) => {
                            tracing::warn!(layer = "service", username = %username, "skipping user: {}", e);
                            continue;
                        }
                    };

                    tracing::info!(layer = "service", username = %username, "store user details in cache");
                    self.caching.set(username, &details).await.map_err(|e| {
                        tracing::error!(layer = "service", "cache write failed: {}", e);
                        AppError::ServiceUnavailable
                    })?;
                    details
                }
            };

            users.push(details);
        }

        if users.is_empty() {
            tracing::info!(layer = "service", "no users returned");
            return Err(AppError::NoUsersReturned);
        }

        tracing::debug!(layer = "service", field = %field, count = users.len(), "sorting user details");
        sort_users(&mut users, field);

        Ok(users)
    }
}
