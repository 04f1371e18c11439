use serde::Deserialize;

/// POST /users 请求体，usernames 缺失或为 null 时视为空列表
#[derive(Debug, Default, Deserialize)]
pub struct ShowDetailsRequest {
    #[serde(default)]
    pub usernames: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    pub sort: Option<String>,
}
