use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token_string: String,
}
