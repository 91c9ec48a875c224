//! Document adapters - quote rendering.
//!
//! - `MarkdownQuoteRenderer` - Renders quotes as markdown
//! - `format_amount` - Currency-aware amount formatting

mod currency;
mod markdown_quote;

pub use currency::{format_amount, format_percent};
pub use markdown_quote::MarkdownQuoteRenderer;
