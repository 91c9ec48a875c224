//! Quote aggregate - a submitted estimate request.

use serde::{Deserialize, Serialize};

use crate::domain::estimate::{Estimate, FormState};
use crate::domain::foundation::{QuoteId, Timestamp, ValidationError};

/// Maximum length for company and contact names.
pub const MAX_CONTACT_FIELD_LENGTH: usize = 200;

/// Who is asking for the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteContact {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl QuoteContact {
    /// Trims and validates contact details.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let company = required("company", &self.company)?;
        let contact_name = required("contact_name", &self.contact_name)?;
        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(Self {
            company,
            contact_name,
            email,
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let length = trimmed.chars().count();
    if length > MAX_CONTACT_FIELD_LENGTH {
        return Err(ValidationError::too_long(
            field,
            MAX_CONTACT_FIELD_LENGTH,
            length,
        ));
    }
    Ok(trimmed.to_string())
}

/// A quote freezes the form state together with the estimate computed
/// for it at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    id: QuoteId,
    reference: String,
    contact: QuoteContact,
    form: FormState,
    estimate: Estimate,
    notes: Option<String>,
    created_at: Timestamp,
}

impl Quote {
    /// Creates a quote. The estimate must have been computed from `form`.
    pub fn new(
        id: QuoteId,
        contact: QuoteContact,
        form: FormState,
        estimate: Estimate,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let contact = contact.validated()?;
        Ok(Self {
            id,
            reference: id.reference_code(),
            contact,
            form,
            estimate,
            notes: notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> &QuoteId {
        &self.id
    }

    /// Human-facing reference, e.g. `QT-1A2B3C4D`.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn contact(&self) -> &QuoteContact {
        &self.contact
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn total_cost(&self) -> f64 {
        self.estimate.total_cost
    }
}
