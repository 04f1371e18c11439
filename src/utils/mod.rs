use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 通用的API响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// "success" 或 "fail"
    pub status: String,
    /// 与HTTP状态码一致
    pub code: u16,
    /// 失败时的错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 成功时的响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn success_to_api_response<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        status: "success".into(),
        code: StatusCode::OK.as_u16(),
        message: None,
        data: Some(data),
    })
}

pub fn error_to_api_response<T>(status: StatusCode, message: String) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        status: "fail".into(),
        code: status.as_u16(),
        message: Some(message),
        data: None,
    })
}
