mod service;
mod sorter;

pub use service::{ListingService, MAX_USERNAMES, MIN_USERNAMES};
pub use sorter::sort_users;
