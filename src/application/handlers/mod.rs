//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod estimate;
pub mod quote;
pub mod travel;
pub mod vendor;
pub mod wizard;
