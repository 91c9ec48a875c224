//! Wizard handlers - live, server-held estimate sessions.

mod budget_logger;
mod errors;
mod sessions;

pub use budget_logger::LoggingBudgetListener;
pub use errors::WizardError;
pub use sessions::{WizardSessions, WizardSnapshot};
