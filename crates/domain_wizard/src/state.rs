//! Wizard state
//!
//! `WizardState` is the single source of truth for the collection flow. It is
//! owned and mutated exclusively by the controller; readers (step renderers,
//! the presenter) only ever borrow it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{ClassificationResult, TransactionInput, REQUIRED_KEYS};

/// The wizard's two collection steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Basic info: `Time` and `Amount`
    Step1,
    /// Transaction details: `V1`..`V28`
    Step2,
}

impl WizardStep {
    /// Human-facing step title
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Step1 => "Basic Info",
            WizardStep::Step2 => "Transaction Details",
        }
    }

    /// The schema keys collected on this step
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WizardStep::Step1 => &REQUIRED_KEYS[..2],
            WizardStep::Step2 => &REQUIRED_KEYS[2..],
        }
    }
}

/// Submission lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// No submission attempted yet
    Idle,
    /// A request is in flight; further submits are rejected
    Pending,
    /// The last attempt produced a classification result
    Succeeded,
    /// The last attempt failed (domain or transport)
    Failed,
}

/// The wizard's mutable record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    /// Step currently shown to the user
    pub current_step: WizardStep,
    /// Accumulated feature values; grows monotonically while editing
    pub fields: TransactionInput,
    /// Submission lifecycle status
    pub submission_status: SubmissionStatus,
    /// Human-readable failure message, set only when Failed
    pub last_error: Option<String>,
    /// Classification result, set only when Succeeded
    pub last_result: Option<ClassificationResult>,
    /// Token of the in-flight attempt; outcomes carrying any other token
    /// are discarded
    pub current_attempt: Option<Uuid>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl WizardState {
    /// Creates a fresh state on Step1 with nothing entered.
    ///
    /// There is no reset operation; starting over means creating a new state.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            current_step: WizardStep::Step1,
            fields: TransactionInput::new(),
            submission_status: SubmissionStatus::Idle,
            last_error: None,
            last_result: None,
            current_attempt: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
