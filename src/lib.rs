use std::sync::Arc;

use cache::CacheRepository;
use client::ProfileRepository;
use config::Config;
use listing::ListingService;
use session::SessionService;

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;
pub mod session;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub listing: ListingService,
    pub session: SessionService,
}

impl AppState {
    pub fn new(
        config: Config,
        caching: Arc<dyn CacheRepository>,
        repository: Arc<dyn ProfileRepository>,
    ) -> Self {
        let listing = ListingService::new(repository, caching.clone(), config.sort_field);
        let session = SessionService::new(caching, config.token_length);

        Self {
            config: Arc::new(config),
            listing,
            session,
        }
    }
}
