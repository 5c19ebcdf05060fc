//! Wizard domain errors

use thiserror::Error;

use crate::state::WizardStep;

/// Errors that can occur in the wizard domain
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Invalid step transition from {from:?} to {to:?}")]
    InvalidStepTransition { from: WizardStep, to: WizardStep },

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Missing required fields: {}", .missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },
}
