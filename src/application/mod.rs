//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are separate from query handlers (read).

pub mod handlers;

pub use handlers::estimate::CalculateEstimateHandler;
pub use handlers::quote::{GetQuoteHandler, RenderQuoteHandler, SubmitQuoteHandler};
pub use handlers::travel::SearchTravelHandler;
pub use handlers::vendor::{
    CreateVendorHandler, DeactivateVendorHandler, DeleteVendorHandler, GetVendorHandler,
    ListVendorsHandler, UpdateVendorHandler,
};
pub use handlers::wizard::WizardSessions;
