//! Transaction Screening Wizard Domain
//!
//! This crate implements the two-step collection wizard: step navigation,
//! field accumulation, the single-flight submission workflow, and the
//! mapping from a classification result to a presentable verdict.
//!
//! # Submission Lifecycle
//!
//! ```text
//! Idle -> Pending -> Succeeded
//!                 -> Failed
//! Succeeded/Failed -> Pending (on resubmit)
//! ```

pub mod controller;
pub mod error;
pub mod presenter;
pub mod state;

pub use controller::{FormStateController, SubmissionAttempt, TRANSPORT_ERROR_MESSAGE};
pub use error::WizardError;
pub use presenter::{present, Verdict};
pub use state::{SubmissionStatus, WizardState, WizardStep};
