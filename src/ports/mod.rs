//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VendorRepository` - Vendor directory persistence
//! - `QuoteRepository` - Submitted quote persistence
//! - `TravelCatalog` - Flight and hotel offers
//! - `QuoteRenderer` - Quote documents

mod quote_renderer;
mod quote_repository;
mod travel_catalog;
mod vendor_repository;

pub use quote_renderer::{QuoteRenderer, RenderedDocument};
pub use quote_repository::QuoteRepository;
pub use travel_catalog::{FlightOffer, FlightSearch, HotelOffer, HotelSearch, TravelCatalog};
pub use vendor_repository::{
    VendorFilter, VendorPage, VendorRepository, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
