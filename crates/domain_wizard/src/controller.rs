//! Form state controller
//!
//! Applies events (field edits, step changes, submission, outcome arrival)
//! to the wizard state, enforcing the step and submission state machines.
//!
//! The controller is event-sourced at its seam: `begin_submit` guards and
//! moves to Pending, `apply_outcome` resolves the attempt. `submit` composes
//! the two around a [`ClassifierPort`] call for hosts that do not need to
//! drive the request themselves. Each attempt is identified by a token so a
//! late outcome from a superseded attempt can never touch fresh state.

use tracing::{debug, info, warn};
use uuid::Uuid;

use core_kernel::{ClassifierPort, ClassifyOutcome, TransactionInput};

use crate::error::WizardError;
use crate::state::{SubmissionStatus, WizardState, WizardStep};

/// Fixed user-facing text for transport-level failures
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// An accepted submission: the attempt token and the snapshot of the fields
/// taken when it was accepted
#[derive(Debug, Clone)]
pub struct SubmissionAttempt {
    pub id: Uuid,
    pub input: TransactionInput,
}

/// Owns the wizard state and applies events to it
#[derive(Debug, Default)]
pub struct FormStateController {
    state: WizardState,
}

impl FormStateController {
    /// Creates a controller with a fresh state on Step1
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    /// Read access to the state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Parses `raw` and stores it under `name`.
    ///
    /// Fails silently when the parse fails, the value is not finite, or the
    /// name is not part of the schema: the field is left unset/unchanged.
    pub fn set_field(&mut self, name: &str, raw: &str) {
        let Ok(value) = raw.trim().parse::<f64>() else {
            debug!(field = name, raw, "ignoring unparseable field edit");
            return;
        };
        if self.state.fields.set(name, value) {
            debug!(field = name, value, "field updated");
            self.state.touch();
        } else {
            debug!(field = name, value, "ignoring field edit");
        }
    }

    /// Navigates between steps.
    ///
    /// Step1 -> Step2 and Step2 -> Step1 are the only transitions. Navigation
    /// never validates fields; entered values survive any amount of
    /// back-and-forth.
    pub fn go_to_step(&mut self, step: WizardStep) -> Result<(), WizardError> {
        if !self.can_transition_to(step) {
            return Err(WizardError::InvalidStepTransition {
                from: self.state.current_step,
                to: step,
            });
        }
        debug!(from = ?self.state.current_step, to = ?step, "step change");
        self.state.current_step = step;
        self.state.touch();
        Ok(())
    }

    /// Accepts a submission if one can start now.
    ///
    /// Rejected while a submission is pending (state untouched) and when the
    /// fields are incomplete. On acceptance clears the previous error and
    /// result, moves to Pending, and returns the attempt token with a
    /// snapshot of the fields.
    pub fn begin_submit(&mut self) -> Result<SubmissionAttempt, WizardError> {
        if self.state.submission_status == SubmissionStatus::Pending {
            warn!("submit rejected: attempt already in flight");
            return Err(WizardError::SubmissionInFlight);
        }
        if !self.state.fields.is_complete() {
            let missing = self.state.fields.missing_keys();
            warn!(missing = missing.len(), "submit rejected: incomplete input");
            return Err(WizardError::IncompleteInput { missing });
        }

        let attempt = SubmissionAttempt {
            id: Uuid::new_v4(),
            input: self.state.fields.clone(),
        };
        self.state.last_error = None;
        self.state.last_result = None;
        self.state.submission_status = SubmissionStatus::Pending;
        self.state.current_attempt = Some(attempt.id);
        self.state.touch();
        info!(attempt = %attempt.id, "submission accepted");
        Ok(attempt)
    }

    /// Resolves a pending attempt.
    ///
    /// An outcome whose token does not match the in-flight attempt is
    /// discarded without touching the state.
    pub fn apply_outcome(&mut self, attempt: Uuid, outcome: ClassifyOutcome) {
        if self.state.current_attempt != Some(attempt) {
            warn!(attempt = %attempt, "discarding outcome for stale attempt");
            return;
        }

        match outcome {
            ClassifyOutcome::Success(result) => {
                info!(attempt = %attempt, label = ?result.label, "submission succeeded");
                self.state.submission_status = SubmissionStatus::Succeeded;
                self.state.last_result = Some(result);
            }
            ClassifyOutcome::DomainFailure(message) => {
                info!(attempt = %attempt, %message, "submission rejected by service");
                self.state.submission_status = SubmissionStatus::Failed;
                self.state.last_error = Some(message);
            }
            ClassifyOutcome::TransportFailure => {
                info!(attempt = %attempt, "submission failed in transport");
                self.state.submission_status = SubmissionStatus::Failed;
                self.state.last_error = Some(TRANSPORT_ERROR_MESSAGE.to_string());
            }
        }
        self.state.current_attempt = None;
        self.state.touch();
    }

    /// Runs one complete submission: guard, classify, resolve.
    pub async fn submit<C>(&mut self, client: &C) -> Result<SubmissionStatus, WizardError>
    where
        C: ClassifierPort + ?Sized,
    {
        let attempt = self.begin_submit()?;
        let outcome = client.classify(&attempt.input).await;
        self.apply_outcome(attempt.id, outcome);
        Ok(self.state.submission_status)
    }

    fn can_transition_to(&self, target: WizardStep) -> bool {
        use WizardStep::*;
        matches!(
            (self.state.current_step, target),
            (Step1, Step2) | (Step2, Step1)
        )
    }
}
