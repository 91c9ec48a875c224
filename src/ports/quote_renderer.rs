//! Quote renderer port - turns a quote into a shareable document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::quote::Quote;

/// Port for rendering quotes.
///
/// Rendering is pure; implementations must not perform I/O.
pub trait QuoteRenderer: Send + Sync {
    fn render(&self, quote: &Quote) -> Result<RenderedDocument, DomainError>;
}

/// A rendered document with its media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub content_type: String,
    pub file_name: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_renderer_is_object_safe() {
        fn _accepts_dyn(_renderer: &dyn QuoteRenderer) {}
    }
}
