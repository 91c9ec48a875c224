//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory vendor and quote repositories
//! - `postgres` - PostgreSQL vendor repository
//! - `travel` - Static flight and hotel catalog
//! - `document` - Markdown quote renderer
//! - `http` - axum REST API

pub mod document;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod travel;
