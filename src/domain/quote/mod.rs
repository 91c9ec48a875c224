//! Quote module - submitted estimate requests.

mod aggregate;
mod errors;

pub use aggregate::{Quote, QuoteContact, MAX_CONTACT_FIELD_LENGTH};
pub use errors::QuoteError;
