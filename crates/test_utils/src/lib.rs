//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the transaction screening
//! test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built transaction inputs
//! - `mock`: A scripted classifier port for driving the submission workflow

pub mod fixtures;
pub mod mock;

pub use fixtures::*;
pub use mock::*;
