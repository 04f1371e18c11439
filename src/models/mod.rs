pub mod user;

pub use user::{ProfileLookup, SortField, UnknownSortField, UserProfile};
