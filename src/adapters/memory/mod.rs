//! In-memory adapters backed by `tokio::sync::RwLock`.

mod quote_repository;
mod vendor_repository;

pub use quote_repository::InMemoryQuoteRepository;
pub use vendor_repository::InMemoryVendorRepository;
