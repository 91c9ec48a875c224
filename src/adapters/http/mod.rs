//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; `router` assembles them.

pub mod error;
pub mod estimate;
pub mod extract;
pub mod quote;
pub mod travel;
pub mod vendor;
pub mod wizard;

mod router;

pub use error::ErrorResponse;
pub use router::{build_router, health, AppState};
