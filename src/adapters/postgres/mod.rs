//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresVendorRepository` - Vendor directory persistence

mod vendor_repository;

pub use vendor_repository::PostgresVendorRepository;
