//! Domain layer containing pricing logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `stall` - Booth selections, the rate table, and the detailed cost aggregator
//! - `estimate` - Wizard form state, the simplified combiner, and the live estimate controller
//! - `vendor` - Admin-managed supplier directory
//! - `quote` - Submitted quote requests

pub mod estimate;
pub mod foundation;
pub mod quote;
pub mod stall;
pub mod vendor;
