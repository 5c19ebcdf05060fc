//! Scripted classifier port
//!
//! `MockClassifier` resolves each call with the next scripted outcome and
//! records what it was asked to classify, so tests can assert both the
//! resulting state and the number of outbound calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use core_kernel::{ClassifierPort, ClassifyOutcome, TransactionInput};

/// A `ClassifierPort` that replays scripted outcomes
#[derive(Debug, Default)]
pub struct MockClassifier {
    outcomes: Mutex<VecDeque<ClassifyOutcome>>,
    calls: AtomicUsize,
    last_input: Mutex<Option<TransactionInput>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a single outcome
    pub fn with_outcome(outcome: ClassifyOutcome) -> Self {
        let mock = Self::new();
        mock.push_outcome(outcome);
        mock
    }

    /// Appends an outcome to the script
    pub fn push_outcome(&self, outcome: ClassifyOutcome) {
        self.outcomes
            .lock()
            .expect("mock outcomes lock poisoned")
            .push_back(outcome);
    }

    /// Number of classify calls received
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The input passed to the most recent classify call
    pub fn last_input(&self) -> Option<TransactionInput> {
        self.last_input
            .lock()
            .expect("mock input lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ClassifierPort for MockClassifier {
    async fn classify(&self, input: &TransactionInput) -> ClassifyOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().expect("mock input lock poisoned") = Some(input.clone());

        self.outcomes
            .lock()
            .expect("mock outcomes lock poisoned")
            .pop_front()
            .unwrap_or(ClassifyOutcome::TransportFailure)
    }
}
