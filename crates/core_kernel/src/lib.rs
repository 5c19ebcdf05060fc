//! Core Kernel - Foundational types for the transaction screening system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - The fixed feature schema a transaction must satisfy before classification
//! - The classification contract (result, risk label, outcome sum type)
//! - Port traits for the external classification service

pub mod classify;
pub mod features;
pub mod ports;

pub use classify::{ClassificationResult, ClassifyOutcome, RiskLabel};
pub use features::{TransactionInput, REQUIRED_KEYS};
pub use ports::{ClassifierPort, HealthCheckable, HealthReport, ServiceStatus};
