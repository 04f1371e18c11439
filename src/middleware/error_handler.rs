use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

/// 记录日志时读取的响应体上限
const MAX_LOGGED_BODY: usize = 4096;

/// 服务端错误时记录请求路径和错误信封
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            error!(%method, %path, status = %parts.status, "failed to read error response body: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        %method,
        %path,
        status = %parts.status,
        body = %String::from_utf8_lossy(&bytes),
        "server error response"
    );

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
