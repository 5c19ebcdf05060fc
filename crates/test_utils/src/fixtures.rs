//! Pre-built transaction inputs

use core_kernel::{TransactionInput, REQUIRED_KEYS};

/// A transaction with all 30 features set.
///
/// `Time` and `Amount` carry realistic magnitudes; the PCA components get
/// small distinct values.
pub fn complete_transaction() -> TransactionInput {
    let mut input = TransactionInput::new();
    input.set("Time", 40_000.0);
    input.set("Amount", 149.62);
    for (i, key) in REQUIRED_KEYS.iter().skip(2).enumerate() {
        input.set(key, (i as f64 + 1.0) * 0.1 - 1.5);
    }
    input
}

/// A transaction with only the first-step fields set
pub fn step_one_only() -> TransactionInput {
    let mut input = TransactionInput::new();
    input.set("Time", 40_000.0);
    input.set("Amount", 149.62);
    input
}
