//! SubmitQuoteHandler - Command handler for quote requests.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::estimate::{Estimator, FormState};
use crate::domain::foundation::QuoteId;
use crate::domain::quote::{Quote, QuoteContact, QuoteError};
use crate::ports::QuoteRepository;

/// Command to submit a quote request.
#[derive(Debug, Clone)]
pub struct SubmitQuoteCommand {
    pub contact: QuoteContact,
    pub form: FormState,
    pub notes: Option<String>,
    /// Total the client displayed, if it sent one. Only used for logging.
    pub client_total: Option<f64>,
}

/// Handler for quote submission.
///
/// The estimate is always recomputed from the submitted form state.
pub struct SubmitQuoteHandler {
    repository: Arc<dyn QuoteRepository>,
    estimator: Arc<Estimator>,
}

impl SubmitQuoteHandler {
    pub fn new(repository: Arc<dyn QuoteRepository>, estimator: Arc<Estimator>) -> Self {
        Self {
            repository,
            estimator,
        }
    }

    pub async fn handle(&self, cmd: SubmitQuoteCommand) -> Result<Quote, QuoteError> {
        let estimate = self.estimator.estimate(&cmd.form);

        if let Some(client_total) = cmd.client_total {
            if (client_total - estimate.total_cost).abs() >= 1.0 {
                warn!(
                    client_total,
                    server_total = estimate.total_cost,
                    "Client total differs from recomputed estimate"
                );
            }
        }

        let quote = Quote::new(QuoteId::new(), cmd.contact, cmd.form, estimate, cmd.notes)?;
        self.repository.save(&quote).await?;

        info!(
            quote_id = %quote.id(),
            reference = quote.reference(),
            total_cost = quote.total_cost(),
            "Quote submitted"
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryQuoteRepository;

    fn contact() -> QuoteContact {
        QuoteContact {
            company: "Acme".to_string(),
            contact_name: "Ravi".to_string(),
            email: "ravi@acme.example".to_string(),
            phone: None,
        }
    }

    fn form() -> FormState {
        let mut form = FormState::default();
        form.stall.area = 20.0;
        form
    }

    #[tokio::test]
    async fn submit_recomputes_estimate_and_persists() {
        let repo = Arc::new(InMemoryQuoteRepository::new());
        let estimator = Arc::new(Estimator::default());
        let handler = SubmitQuoteHandler::new(repo.clone(), estimator.clone());

        let quote = handler
            .handle(SubmitQuoteCommand {
                contact: contact(),
                form: form(),
                notes: None,
                client_total: Some(1.0),
            })
            .await
            .unwrap();

        let expected = estimator.estimate(&form());
        assert_eq!(quote.estimate(), &expected);
        assert_eq!(quote.total_cost(), expected.total_cost);
        assert!(repo.find_by_id(quote.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_contact_is_rejected() {
        let repo = Arc::new(InMemoryQuoteRepository::new());
        let handler = SubmitQuoteHandler::new(repo.clone(), Arc::new(Estimator::default()));

        let result = handler
            .handle(SubmitQuoteCommand {
                contact: QuoteContact {
                    email: "nope".to_string(),
                    ..contact()
                },
                form: form(),
                notes: None,
                client_total: None,
            })
            .await;

        assert!(matches!(result, Err(QuoteError::ValidationFailed { .. })));
        assert!(repo.list_recent(10).await.unwrap().is_empty());
    }
}
