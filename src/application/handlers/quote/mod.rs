//! Quote handlers.

mod get_quote;
mod submit_quote;

pub use get_quote::{GetQuoteHandler, RenderQuoteHandler};
pub use submit_quote::{SubmitQuoteCommand, SubmitQuoteHandler};
