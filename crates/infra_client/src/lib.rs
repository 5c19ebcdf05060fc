//! HTTP adapter for the classification service
//!
//! Implements the `ClassifierPort` from `core_kernel` against the service's
//! JSON-over-HTTP contract, and a `HealthCheckable` probe of its health
//! endpoint. This crate is the only place in the workspace that knows a
//! network exists.

pub mod config;
pub mod http;
pub mod response;

pub use config::ClassifierConfig;
pub use http::HttpClassifier;
