//! Ports for the external classification service
//!
//! The wizard core talks to the classifier exclusively through these traits.
//! Adapters (HTTP in production, mocks in tests) implement them; the domain
//! never sees a transport.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::ClassifyOutcome;
use crate::features::TransactionInput;

/// The sole I/O boundary of the wizard core.
///
/// Implementations must never panic on transport problems; every way an
/// attempt can end is encoded in [`ClassifyOutcome`].
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Submits the accumulated features and resolves the attempt
    async fn classify(&self, input: &TransactionInput) -> ClassifyOutcome;
}

/// Health status of the classification service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Service reachable and model loaded
    Healthy,
    /// Service reachable but not ready to classify
    Degraded,
    /// Service could not be reached
    Unreachable,
}

/// Result of probing the classification service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    /// Latency of the probe in milliseconds
    pub latency_ms: u64,
    /// Optional detail, e.g. what the service reported as missing
    pub message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

/// Trait for adapters that can probe their backing service
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthReport;
}
