//! In-memory quote repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, QuoteId};
use crate::domain::quote::Quote;
use crate::ports::QuoteRepository;

/// In-memory storage for submitted quotes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteRepository {
    quotes: Arc<RwLock<HashMap<QuoteId, Quote>>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn save(&self, quote: &Quote) -> Result<(), DomainError> {
        self.quotes.write().await.insert(*quote.id(), quote.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &QuoteId) -> Result<Option<Quote>, DomainError> {
        Ok(self.quotes.read().await.get(id).cloned())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Quote>, DomainError> {
        let quotes = self.quotes.read().await;
        let mut recent: Vec<Quote> = quotes.values().cloned().collect();
        recent.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        recent.truncate(limit as usize);
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::{Estimate, FormState};
    use crate::domain::quote::QuoteContact;

    fn quote() -> Quote {
        Quote::new(
            QuoteId::new(),
            QuoteContact {
                company: "Acme".to_string(),
                contact_name: "Ravi".to_string(),
                email: "ravi@acme.example".to_string(),
                phone: None,
            },
            FormState::default(),
            Estimate::default(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryQuoteRepository::new();
        let q = quote();
        repo.save(&q).await.unwrap();

        assert_eq!(repo.find_by_id(q.id()).await.unwrap(), Some(q));
        assert_eq!(repo.find_by_id(&QuoteId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_recent_respects_limit() {
        let repo = InMemoryQuoteRepository::new();
        for _ in 0..3 {
            repo.save(&quote()).await.unwrap();
        }
        assert_eq!(repo.list_recent(2).await.unwrap().len(), 2);
    }
}
