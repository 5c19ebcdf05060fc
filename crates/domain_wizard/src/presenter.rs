//! Verdict presentation
//!
//! Pure derivation of display values from a classification result. No side
//! effects; deterministic for a given result.

use serde::Serialize;

use core_kernel::ClassificationResult;

/// Display values derived from a classification result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// Headline, e.g. "Potential Fraud Detected"
    pub verdict_label: &'static str,
    /// Risk badge, e.g. "High Risk"
    pub risk_tier: &'static str,
    /// Model confidence as a percentage, rounded to two decimals
    pub confidence_percent: f64,
    /// Fill proportion for a 0-100 confidence bar
    pub bar_fraction: f64,
    /// One-sentence explanation accompanying the verdict
    pub summary: &'static str,
}

/// Derives the presentable verdict from a classification result
pub fn present(result: &ClassificationResult) -> Verdict {
    let confidence_percent = (result.probability * 10_000.0).round() / 100.0;

    if result.label.is_fraud() {
        Verdict {
            verdict_label: "Potential Fraud Detected",
            risk_tier: "High Risk",
            confidence_percent,
            bar_fraction: confidence_percent,
            summary: "This transaction shows patterns consistent with fraudulent activity.",
        }
    } else {
        Verdict {
            verdict_label: "Transaction Appears Safe",
            risk_tier: "Low Risk",
            confidence_percent,
            bar_fraction: confidence_percent,
            summary: "This transaction appears to be legitimate based on our analysis.",
        }
    }
}
