use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::AppState;

pub const SESSION_TOKEN_HEADER: &str = "Session-Token";

/// 校验请求头中的会话令牌，缺失时按不存在处理
pub async fn require_session(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .trim()
        .to_string();

    tracing::info!(layer = "controller", "verifying session");
    if let Err(e) = state.session.verify_token(&token).await {
        tracing::warn!(layer = "controller", "session rejected: {}", e);
        return e.into_response();
    }

    next.run(req).await
}
