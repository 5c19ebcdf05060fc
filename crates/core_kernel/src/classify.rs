//! Classification contract
//!
//! Types describing what the external classification service returns,
//! independent of any transport.

use serde::{Deserialize, Serialize};

/// Risk label assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    Fraud,
    Legitimate,
}

impl RiskLabel {
    /// Maps the service's raw prediction: 1 means fraud, anything else legitimate
    pub fn from_prediction(prediction: i64) -> Self {
        if prediction == 1 {
            RiskLabel::Fraud
        } else {
            RiskLabel::Legitimate
        }
    }

    pub fn is_fraud(self) -> bool {
        self == RiskLabel::Fraud
    }
}

/// A usable classification returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: RiskLabel,
    /// Model confidence in [0, 1]
    pub probability: f64,
}

/// Resolution of a single classification attempt.
///
/// The three paths are exhaustive: the service either produced a usable
/// result, rejected the request at the business level, or was never
/// usefully reached at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyOutcome {
    /// The service reported success and returned a prediction
    Success(ClassificationResult),
    /// The service responded but reported a non-success status;
    /// carries the service-supplied message to surface verbatim
    DomainFailure(String),
    /// Connection error, timeout, or a response that could not be read
    TransportFailure,
}
