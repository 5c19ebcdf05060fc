//! Wire DTOs and response mapping
//!
//! The service signals usability through the `status` field of the body, not
//! the HTTP status code. A `"success"` body must carry both `prediction` and
//! `probability`; anything else is a domain rejection whose message is
//! surfaced verbatim. The service populates `error` rather than `message` on
//! some rejection paths, so both are accepted.

use serde::Deserialize;
use tracing::warn;

use core_kernel::{ClassificationResult, ClassifyOutcome, RiskLabel};

/// Body of a classification response
#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    pub status: String,
    #[serde(default)]
    pub prediction: Option<i64>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub scaler_loaded: bool,
}

impl HealthResponse {
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded && self.scaler_loaded
    }
}

/// Maps a parsed response body onto the outcome sum type
pub fn map_response(body: ClassifyResponse) -> ClassifyOutcome {
    if body.status == "success" {
        match (body.prediction, body.probability) {
            (Some(prediction), Some(probability)) => {
                ClassifyOutcome::Success(ClassificationResult {
                    label: RiskLabel::from_prediction(prediction),
                    probability,
                })
            }
            _ => {
                // Success without the prediction pair violates the contract;
                // treated like any other unreadable response.
                warn!("success response missing prediction or probability");
                ClassifyOutcome::TransportFailure
            }
        }
    } else {
        let message = body
            .message
            .or(body.error)
            .unwrap_or_else(|| format!("Classification service returned status '{}'", body.status));
        ClassifyOutcome::DomainFailure(message)
    }
}
