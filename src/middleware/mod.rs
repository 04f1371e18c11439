mod error_handler;
mod session;

pub use error_handler::log_errors;
pub use session::{SESSION_TOKEN_HEADER, require_session};
