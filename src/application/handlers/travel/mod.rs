//! Travel handlers.

mod search_travel;

pub use search_travel::{SearchTravelHandler, MAX_NIGHTS};
