//! Quote queries.

use std::sync::Arc;

use crate::domain::foundation::QuoteId;
use crate::domain::quote::{Quote, QuoteError};
use crate::ports::{QuoteRenderer, QuoteRepository, RenderedDocument};

/// Handler for fetching a quote.
pub struct GetQuoteHandler {
    repository: Arc<dyn QuoteRepository>,
}

impl GetQuoteHandler {
    pub fn new(repository: Arc<dyn QuoteRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, quote_id: QuoteId) -> Result<Quote, QuoteError> {
        self.repository
            .find_by_id(&quote_id)
            .await?
            .ok_or(QuoteError::not_found(quote_id))
    }
}

/// Handler for rendering a stored quote as a document.
pub struct RenderQuoteHandler {
    repository: Arc<dyn QuoteRepository>,
    renderer: Arc<dyn QuoteRenderer>,
}

impl RenderQuoteHandler {
    pub fn new(repository: Arc<dyn QuoteRepository>, renderer: Arc<dyn QuoteRenderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    pub async fn handle(&self, quote_id: QuoteId) -> Result<RenderedDocument, QuoteError> {
        let quote = self
            .repository
            .find_by_id(&quote_id)
            .await?
            .ok_or(QuoteError::not_found(quote_id))?;

        Ok(self.renderer.render(&quote)?)
    }
}
