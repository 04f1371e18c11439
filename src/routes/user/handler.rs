use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError, models::SortField, utils::success_to_api_response};

use super::model::{ShowDetailsRequest, SortQuery};

/// 批量查询用户资料
///
/// 请求体手动解析，保证格式错误时也返回统一的错误信封。
#[axum::debug_handler]
pub async fn show_details(
    State(state): State<AppState>,
    query: Result<Query<SortQuery>, QueryRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(layer = "controller", "decoding post body");
    let req: ShowDetailsRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(layer = "controller", "error: {}", e);
        AppError::Decode
    })?;

    tracing::info!(layer = "controller", "validating post body");
    let usernames = req.usernames.unwrap_or_default();
    state.listing.validate(&usernames)?;

    // 查询串无法解析或排序字段未识别时，回落到服务默认值
    let sort = match query {
        Ok(Query(query)) => query.sort,
        Err(e) => {
            tracing::warn!(layer = "controller", "ignoring query string: {}", e);
            None
        }
    };
    let field = sort
        .as_deref()
        .and_then(|s| s.parse::<SortField>().ok())
        .unwrap_or_else(|| state.listing.sort_field());

    tracing::info!(layer = "controller", "collecting user details");
    let details = state
        .listing
        .show_details_sorted_by(&usernames, field)
        .await?;

    tracing::info!(layer = "controller", count = details.len(), "displaying user details");
    Ok((StatusCode::OK, success_to_api_response(details)))
}
