use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::error_to_api_response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("please input between 1 to 10 usernames only")]
    Validation,
    #[error("unable to decode your request")]
    Decode,
    #[error("service unavailable")]
    ServiceUnavailable,
    #[error("no users returned")]
    NoUsersReturned,
    #[error("session does not exist")]
    SessionNotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::Decode
            | AppError::ServiceUnavailable
            | AppError::NoUsersReturned
            | AppError::SessionNotFound => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = error_to_api_response::<()>(status, self.to_string());

        (status, body).into_response()
    }
}
