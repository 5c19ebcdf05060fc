//! HTTP classifier adapter

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use core_kernel::{
    ClassifierPort, ClassifyOutcome, HealthCheckable, HealthReport, ServiceStatus,
    TransactionInput,
};

use crate::config::ClassifierConfig;
use crate::response::{map_response, ClassifyResponse, HealthResponse};

/// `ClassifierPort` implementation backed by the HTTP classification service.
///
/// The accumulated features are POSTed as the entire JSON body; the body of
/// the response decides between success and domain failure. Connection
/// errors, timeouts, and bodies that cannot be parsed all resolve to
/// `TransportFailure` - the adapter never panics on the network's behalf.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl HttpClassifier {
    /// Creates an adapter for the configured endpoint
    pub fn new(config: ClassifierConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this adapter was built with
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

#[async_trait]
impl ClassifierPort for HttpClassifier {
    async fn classify(&self, input: &TransactionInput) -> ClassifyOutcome {
        debug!(endpoint = %self.config.endpoint_url, features = input.len(), "sending classification request");

        let response = match self
            .client
            .post(&self.config.endpoint_url)
            .json(input)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "classification request failed");
                return ClassifyOutcome::TransportFailure;
            }
        };

        // The HTTP status code is deliberately not consulted; the service
        // reports rejections through the body's status field.
        match response.json::<ClassifyResponse>().await {
            Ok(body) => map_response(body),
            Err(error) => {
                warn!(%error, "classification response could not be parsed");
                ClassifyOutcome::TransportFailure
            }
        }
    }
}

#[async_trait]
impl HealthCheckable for HttpClassifier {
    /// Probes the service's health endpoint
    async fn health_check(&self) -> HealthReport {
        let url = self.config.health_url();
        let started = Instant::now();

        let outcome = match self.client.get(&url).send().await {
            Ok(response) => response.json::<HealthResponse>().await,
            Err(error) => Err(error),
        };
        let latency_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(body) if body.is_ready() => HealthReport {
                status: ServiceStatus::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Ok(body) => HealthReport {
                status: ServiceStatus::Degraded,
                latency_ms,
                message: Some(format!(
                    "status={}, model_loaded={}, scaler_loaded={}",
                    body.status, body.model_loaded, body.scaler_loaded
                )),
                checked_at: Utc::now(),
            },
            Err(error) => {
                warn!(%error, "health probe failed");
                HealthReport {
                    status: ServiceStatus::Unreachable,
                    latency_ms,
                    message: Some(error.to_string()),
                    checked_at: Utc::now(),
                }
            }
        }
    }
}
