use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{AppState, error::AppError, utils::success_to_api_response};

use super::model::TokenResponse;

/// 签发会话令牌
#[axum::debug_handler]
pub async fn generate_token(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!(layer = "controller", "generating token");
    let token_string = state.session.generate_token().await?;

    tracing::info!(layer = "controller", "return token to user");
    Ok((
        StatusCode::OK,
        success_to_api_response(TokenResponse { token_string }),
    ))
}
