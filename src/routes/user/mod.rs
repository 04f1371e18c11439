mod handler;
mod model;

pub use handler::show_details;
