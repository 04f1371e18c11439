mod service;

pub use service::{SESSION_FLAG, SessionService};
