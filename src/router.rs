use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{log_errors, require_session},
    routes,
};

/// 创建主路由
pub fn create_router(state: AppState) -> Router {
    // 公开路由
    let public_routes: Router<AppState> = Router::new()
        .route("/generate-token", get(routes::session::generate_token))
        .route("/ping", get(routes::health::ping));

    // 用户资料路由，按配置决定是否需要会话令牌
    let mut user_routes: Router<AppState> =
        Router::new().route("/users", post(routes::user::show_details));
    if state.config.session_required {
        user_routes = user_routes.layer(from_fn_with_state(state.clone(), require_session));
    }

    let router = Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .layer(from_fn(log_errors));

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    router.with_state(state)
}
