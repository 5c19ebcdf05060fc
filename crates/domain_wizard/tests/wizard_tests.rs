//! Comprehensive tests for domain_wizard

use uuid::Uuid;

use core_kernel::{ClassificationResult, ClassifyOutcome, RiskLabel};
use domain_wizard::{
    present, FormStateController, SubmissionStatus, WizardError, WizardStep,
    TRANSPORT_ERROR_MESSAGE,
};
use test_utils::{complete_transaction, MockClassifier};

fn controller_with_complete_fields() -> FormStateController {
    let mut controller = FormStateController::new();
    let input = complete_transaction();
    for key in core_kernel::REQUIRED_KEYS.iter() {
        controller.set_field(key, &input.get(key).unwrap().to_string());
    }
    controller
}

fn fraud_outcome(probability: f64) -> ClassifyOutcome {
    ClassifyOutcome::Success(ClassificationResult {
        label: RiskLabel::Fraud,
        probability,
    })
}

// ============================================================================
// Navigation Tests
// ============================================================================

mod navigation_tests {
    use super::*;

    #[test]
    fn test_navigation_does_not_erase_fields() {
        let mut controller = FormStateController::new();
        controller.set_field("Time", "100.0");
        controller.set_field("Amount", "50.25");

        controller.go_to_step(WizardStep::Step2).unwrap();
        controller.set_field("V1", "-1.3598");
        controller.go_to_step(WizardStep::Step1).unwrap();
        controller.go_to_step(WizardStep::Step2).unwrap();

        assert_eq!(controller.state().fields.get("Time"), Some(100.0));
        assert_eq!(controller.state().fields.get("Amount"), Some(50.25));
        assert_eq!(controller.state().fields.get("V1"), Some(-1.3598));
    }

    #[test]
    fn test_navigation_ignores_incomplete_step_one() {
        // Advancing with nothing entered is allowed; the gate is on submit.
        let mut controller = FormStateController::new();
        assert!(controller.go_to_step(WizardStep::Step2).is_ok());
    }
}

// ============================================================================
// Submission Workflow Tests
// ============================================================================

mod submission_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_submission() {
        let mut controller = controller_with_complete_fields();
        let mock = MockClassifier::with_outcome(fraud_outcome(0.93));

        let status = controller.submit(&mock).await.unwrap();

        assert_eq!(status, SubmissionStatus::Succeeded);
        assert!(controller.state().last_error.is_none());
        let result = controller.state().last_result.unwrap();
        assert_eq!(result.label, RiskLabel::Fraud);

        let verdict = present(&result);
        assert_eq!(verdict.verdict_label, "Potential Fraud Detected");
        assert_eq!(verdict.confidence_percent, 93.00);
        assert_eq!(verdict.risk_tier, "High Risk");
    }

    #[tokio::test]
    async fn test_submission_sends_full_snapshot() {
        let mut controller = controller_with_complete_fields();
        let mock = MockClassifier::with_outcome(fraud_outcome(0.5));

        controller.submit(&mock).await.unwrap();

        assert_eq!(mock.call_count(), 1);
        let sent = mock.last_input().unwrap();
        assert!(sent.is_complete());
        assert_eq!(sent.len(), 30);
    }

    #[tokio::test]
    async fn test_domain_failure_surfaces_message_verbatim() {
        let mut controller = controller_with_complete_fields();
        let mock = MockClassifier::with_outcome(ClassifyOutcome::DomainFailure(
            "service unavailable".to_string(),
        ));

        let status = controller.submit(&mock).await.unwrap();

        assert_eq!(status, SubmissionStatus::Failed);
        assert_eq!(
            controller.state().last_error.as_deref(),
            Some("service unavailable")
        );
        assert!(controller.state().last_result.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fixed_message_and_clears_result() {
        let mut controller = controller_with_complete_fields();
        let mock = MockClassifier::with_outcome(fraud_outcome(0.8));
        controller.submit(&mock).await.unwrap();
        assert!(controller.state().last_result.is_some());

        mock.push_outcome(ClassifyOutcome::TransportFailure);
        let status = controller.submit(&mock).await.unwrap();

        assert_eq!(status, SubmissionStatus::Failed);
        assert_eq!(
            controller.state().last_error.as_deref(),
            Some(TRANSPORT_ERROR_MESSAGE)
        );
        assert!(controller.state().last_result.is_none());
    }

    #[tokio::test]
    async fn test_incomplete_input_makes_no_outbound_call() {
        let mut controller = FormStateController::new();
        controller.set_field("Time", "1.0");
        let mock = MockClassifier::with_outcome(fraud_outcome(0.5));

        let err = controller.submit(&mock).await.unwrap_err();

        assert!(matches!(err, WizardError::IncompleteInput { .. }));
        assert_eq!(mock.call_count(), 0);
        assert_eq!(controller.state().submission_status, SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_clears_error_before_resolution() {
        let mut controller = controller_with_complete_fields();
        let mock = MockClassifier::with_outcome(ClassifyOutcome::TransportFailure);
        controller.submit(&mock).await.unwrap();
        assert!(controller.state().last_error.is_some());

        let attempt = controller.begin_submit().unwrap();
        assert_eq!(
            controller.state().submission_status,
            SubmissionStatus::Pending
        );
        assert!(controller.state().last_error.is_none());
        assert!(controller.state().last_result.is_none());

        controller.apply_outcome(attempt.id, fraud_outcome(0.6));
        assert_eq!(
            controller.state().submission_status,
            SubmissionStatus::Succeeded
        );
    }
}

// ============================================================================
// Single-Flight Tests
// ============================================================================

mod single_flight_tests {
    use super::*;

    #[test]
    fn test_reentrant_submit_is_rejected_without_state_change() {
        let mut controller = controller_with_complete_fields();
        let attempt = controller.begin_submit().unwrap();

        let err = controller.begin_submit().unwrap_err();

        assert!(matches!(err, WizardError::SubmissionInFlight));
        assert_eq!(
            controller.state().submission_status,
            SubmissionStatus::Pending
        );
        assert_eq!(controller.state().current_attempt, Some(attempt.id));

        // The original attempt still resolves normally.
        controller.apply_outcome(attempt.id, fraud_outcome(0.7));
        assert_eq!(
            controller.state().submission_status,
            SubmissionStatus::Succeeded
        );
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut controller = controller_with_complete_fields();
        let attempt = controller.begin_submit().unwrap();

        controller.apply_outcome(Uuid::new_v4(), fraud_outcome(0.9));

        assert_eq!(
            controller.state().submission_status,
            SubmissionStatus::Pending
        );
        assert!(controller.state().last_result.is_none());

        controller.apply_outcome(
            attempt.id,
            ClassifyOutcome::DomainFailure("rejected".to_string()),
        );
        assert_eq!(controller.state().submission_status, SubmissionStatus::Failed);
    }

    #[test]
    fn test_outcome_after_resolution_is_discarded() {
        let mut controller = controller_with_complete_fields();
        let attempt = controller.begin_submit().unwrap();
        controller.apply_outcome(attempt.id, fraud_outcome(0.9));

        // A duplicate resolution for the same attempt no longer matches.
        controller.apply_outcome(attempt.id, ClassifyOutcome::TransportFailure);

        assert_eq!(
            controller.state().submission_status,
            SubmissionStatus::Succeeded
        );
        assert!(controller.state().last_error.is_none());
    }
}

// ============================================================================
// Status Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_every_pending_resolves_to_one_terminal() {
        let mut controller = controller_with_complete_fields();
        let mock = MockClassifier::new();
        mock.push_outcome(fraud_outcome(0.2));
        mock.push_outcome(ClassifyOutcome::DomainFailure("no".to_string()));
        mock.push_outcome(ClassifyOutcome::TransportFailure);

        assert_eq!(
            controller.submit(&mock).await.unwrap(),
            SubmissionStatus::Succeeded
        );
        assert_eq!(
            controller.submit(&mock).await.unwrap(),
            SubmissionStatus::Failed
        );
        assert_eq!(
            controller.submit(&mock).await.unwrap(),
            SubmissionStatus::Failed
        );
        assert_eq!(mock.call_count(), 3);
        assert!(controller.state().current_attempt.is_none());
    }

    #[test]
    fn test_all_statuses_serialize() {
        let statuses = vec![
            SubmissionStatus::Idle,
            SubmissionStatus::Pending,
            SubmissionStatus::Succeeded,
            SubmissionStatus::Failed,
        ];

        for status in statuses {
            let json = serde_json::to_string(&status).unwrap();
            assert!(!json.is_empty());
        }
    }
}
