//! Request and response DTOs for quote endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::estimate::{Estimate, FormState};
use crate::domain::quote::{Quote, QuoteContact};

/// Request to submit a quote.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuoteRequest {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub form: FormState,
    /// Total shown to the user; the server recomputes regardless.
    #[serde(default)]
    pub client_total: Option<f64>,
}

impl SubmitQuoteRequest {
    pub fn contact(&self) -> QuoteContact {
        QuoteContact {
            company: self.company.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: String,
    pub reference: String,
    pub contact: QuoteContact,
    pub notes: Option<String>,
    pub form: FormState,
    pub estimate: Estimate,
    pub total_cost: f64,
    pub created_at: String,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id().to_string(),
            reference: quote.reference().to_string(),
            contact: quote.contact().clone(),
            notes: quote.notes().map(str::to_string),
            form: quote.form().clone(),
            estimate: quote.estimate().clone(),
            total_cost: quote.total_cost(),
            created_at: quote.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_accepts_partial_form() {
        let json = r#"{
            "company": "Acme",
            "contact_name": "Ravi",
            "email": "ravi@acme.example",
            "form": {"stall": {"area": 20, "wall_type": "mdf"}}
        }"#;
        let req: SubmitQuoteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.form.stall.area, 20.0);
        assert_eq!(req.form.stall.wall_type.as_str(), "mdf");
        assert!(req.client_total.is_none());
        assert_eq!(req.contact().company, "Acme");
    }
}
