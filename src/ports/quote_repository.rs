//! Quote repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, QuoteId};
use crate::domain::quote::Quote;

/// Repository port for submitted quotes. Quotes are immutable once saved.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Save a new quote.
    async fn save(&self, quote: &Quote) -> Result<(), DomainError>;

    /// Find a quote by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &QuoteId) -> Result<Option<Quote>, DomainError>;

    /// Most recent quotes first.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Quote>, DomainError>;
}
