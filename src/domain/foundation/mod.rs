//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, currency, and error types that form the
//! vocabulary shared by the estimation, vendor, and quote modules.

mod currency;
mod errors;
mod ids;
mod timestamp;

pub use currency::Currency;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuoteId, VendorId, WizardId};
pub use timestamp::Timestamp;
