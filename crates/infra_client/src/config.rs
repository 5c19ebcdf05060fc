//! Classifier endpoint configuration

use serde::Deserialize;

/// Configuration for the classification service client
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Full URL of the prediction endpoint
    pub endpoint_url: String,
    /// Request timeout in milliseconds (transport concern, not enforced by
    /// the wizard core)
    pub timeout_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:5000/predict".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl ClassifierConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLASSIFIER"))
            .build()?
            .try_deserialize()
    }

    /// The service's health endpoint, a sibling of the prediction endpoint
    pub fn health_url(&self) -> String {
        match self.endpoint_url.rsplit_once('/') {
            Some((base, _)) => format!("{base}/health"),
            None => format!("{}/health", self.endpoint_url),
        }
    }
}
