//! Request and response DTOs for wizard endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::wizard::WizardSnapshot;
use crate::domain::estimate::{Estimate, FormChange, FormState};

/// Request to start a wizard; the body may be omitted entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWizardRequest {
    #[serde(default)]
    pub initial: Option<FormState>,
}

/// Request to apply field changes, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWizardRequest {
    pub changes: Vec<FormChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardResponse {
    pub id: String,
    pub state: FormState,
    pub estimate: Estimate,
}

impl From<WizardSnapshot> for WizardResponse {
    fn from(snapshot: WizardSnapshot) -> Self {
        Self {
            id: snapshot.id.to_string(),
            state: snapshot.state,
            estimate: snapshot.estimate,
        }
    }
}
