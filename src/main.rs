use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use profile_lookup::{
    AppState,
    cache::{CacheRepository, MemoryCache, RedisCache},
    client::GithubClient,
    config::{CacheBackend, Config},
    router::create_router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 初始化日志，RUST_LOG 优先于 LOG_LEVEL
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 设置缓存
    let caching: Arc<dyn CacheRepository> = match config.cache_backend {
        CacheBackend::Redis => {
            let redis_client =
                redis::Client::open(config.redis_url()).expect("Failed to create Redis client");
            tracing::info!("Redis server running at {}:{}", config.redis_host, config.redis_port);
            Arc::new(RedisCache::new(
                Arc::new(redis_client),
                config.key_expiration(),
                config.session_expiration(),
            ))
        }
        CacheBackend::Memory => {
            tracing::warn!("Using in-process cache, entries are not shared between instances");
            Arc::new(MemoryCache::new(
                config.key_expiration(),
                config.session_expiration(),
            ))
        }
    };

    // 设置上游客户端
    let repository =
        Arc::new(GithubClient::new(&config.github_url).expect("Invalid upstream base URL"));

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );

    let state = AppState::new(config, caching, repository);
    let app = create_router(state);

    // 启动服务器
    tracing::info!("Serving at {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
