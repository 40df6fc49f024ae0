//! Unit tests for the verification code registry

use std::sync::Arc;

use chrono::Duration;

use crate::errors::VerificationError;
use crate::services::verification::{VerificationService, VerificationServiceConfig};

use super::mocks::{MockClock, MockNotifier, ScriptedCodes};

struct Harness {
    service: Arc<VerificationService<MockNotifier>>,
    notifier: Arc<MockNotifier>,
    clock: Arc<MockClock>,
}

fn harness(codes: &[&str], fail_delivery: bool) -> Harness {
    let notifier = Arc::new(MockNotifier::new(fail_delivery));
    let clock = Arc::new(MockClock::new());
    let service = Arc::new(VerificationService::with_parts(
        notifier.clone(),
        clock.clone(),
        Arc::new(ScriptedCodes::new(codes)),
        VerificationServiceConfig::default(),
    ));
    Harness {
        service,
        notifier,
        clock,
    }
}

#[tokio::test]
async fn test_issue_then_validate_succeeds_once() {
    let h = harness(&["482913"], false);

    let issued = h.service.issue("a@b.com").await.unwrap();
    assert_eq!(issued.code, "482913");
    assert_eq!(h.notifier.last_code_for("a@b.com"), Some("482913".into()));

    assert!(h.service.validate("a@b.com", "482913").is_ok());

    // The record was consumed; the same code never validates twice.
    assert_eq!(
        h.service.validate("a@b.com", "482913"),
        Err(VerificationError::CodeNotFound)
    );
}

#[tokio::test]
async fn test_issue_rejects_invalid_email() {
    let h = harness(&["482913"], false);

    for bad in ["", "not-an-email", "user@nodot", "@missing.com", "a b@c.de"] {
        assert_eq!(
            h.service.issue(bad).await,
            Err(VerificationError::InvalidEmail),
            "expected rejection for {:?}",
            bad
        );
    }
    assert_eq!(h.notifier.sent_count(), 0);
}

#[tokio::test]
async fn test_reissue_inside_cooldown_is_rejected() {
    let h = harness(&["111111", "222222"], false);

    h.service.issue("a@b.com").await.unwrap();
    h.clock.advance(Duration::seconds(10));

    match h.service.issue("a@b.com").await {
        Err(VerificationError::Cooldown { remaining_seconds }) => {
            assert_eq!(remaining_seconds, 50);
        }
        other => panic!("expected cooldown, got {:?}", other),
    }

    // The rejected request must not have generated a send.
    assert_eq!(h.notifier.sent_count(), 1);
    // The original code is still the valid one.
    assert!(h.service.validate("a@b.com", "111111").is_ok());
}

#[tokio::test]
async fn test_reissue_after_cooldown_replaces_record() {
    let h = harness(&["111111", "222222"], false);

    h.service.issue("a@b.com").await.unwrap();
    // Burn some attempts on the first code.
    let _ = h.service.validate("a@b.com", "000000");
    let _ = h.service.validate("a@b.com", "000000");

    h.clock.advance(Duration::seconds(61));
    h.service.issue("a@b.com").await.unwrap();

    // Old code is invalidated: it now counts as a mismatch, never a success.
    match h.service.validate("a@b.com", "111111") {
        Err(VerificationError::CodeMismatch { remaining_attempts }) => {
            // Attempt counter was reset by the re-issue.
            assert_eq!(remaining_attempts, 4);
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
    assert!(h.service.validate("a@b.com", "222222").is_ok());
}

#[tokio::test]
async fn test_validate_after_expiry() {
    let h = harness(&["482913"], false);

    h.service.issue("a@b.com").await.unwrap();
    h.clock.advance(Duration::minutes(10) + Duration::seconds(1));

    assert_eq!(
        h.service.validate("a@b.com", "482913"),
        Err(VerificationError::CodeExpired)
    );
    // Expiry removed the record entirely.
    assert_eq!(
        h.service.validate("a@b.com", "482913"),
        Err(VerificationError::CodeNotFound)
    );
}

#[tokio::test]
async fn test_exactly_five_wrong_guesses_exhaust_a_record() {
    let h = harness(&["482913"], false);
    h.service.issue("a@b.com").await.unwrap();

    // Calls 1-5 report remaining 4, 3, 2, 1, 0.
    for expected_remaining in [4, 3, 2, 1, 0] {
        match h.service.validate("a@b.com", "000000") {
            Err(VerificationError::CodeMismatch { remaining_attempts }) => {
                assert_eq!(remaining_attempts, expected_remaining);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    // Call 6 reports exhaustion regardless of the submitted code, and
    // removes the record.
    assert_eq!(
        h.service.validate("a@b.com", "482913"),
        Err(VerificationError::AttemptsExceeded)
    );
    assert_eq!(
        h.service.validate("a@b.com", "482913"),
        Err(VerificationError::CodeNotFound)
    );
}

#[tokio::test]
async fn test_correct_code_after_fourth_wrong_guess_still_wins() {
    let h = harness(&["482913"], false);
    h.service.issue("a@b.com").await.unwrap();

    for _ in 0..4 {
        let _ = h.service.validate("a@b.com", "000000");
    }
    assert!(h.service.validate("a@b.com", "482913").is_ok());
}

#[tokio::test]
async fn test_delivery_failure_keeps_record_authoritative() {
    let h = harness(&["482913"], true);

    match h.service.issue("a@b.com").await {
        Err(VerificationError::Delivery { .. }) => {}
        other => panic!("expected delivery error, got {:?}", other),
    }

    // The code was committed before the send; it still validates.
    assert!(h.service.code_exists("a@b.com"));
    assert!(h.service.validate("a@b.com", "482913").is_ok());
}

#[tokio::test]
async fn test_sweep_removes_only_expired_records() {
    let h = harness(&["111111", "222222"], false);

    h.service.issue("old@b.com").await.unwrap();
    h.clock.advance(Duration::minutes(9));
    h.service.issue("fresh@b.com").await.unwrap();
    h.clock.advance(Duration::minutes(2));

    assert_eq!(h.service.sweep(), 1);
    assert!(!h.service.code_exists("old@b.com"));
    assert!(h.service.code_exists("fresh@b.com"));

    // Sweeping again finds nothing new.
    assert_eq!(h.service.sweep(), 0);
}

#[tokio::test]
async fn test_issue_sweeps_expired_records_opportunistically() {
    let h = harness(&["111111", "222222"], false);

    h.service.issue("stale@b.com").await.unwrap();
    h.clock.advance(Duration::minutes(11));

    // Issuing for another address clears the stale record as a side effect.
    h.service.issue("other@b.com").await.unwrap();
    assert!(!h.service.code_exists("stale@b.com"));
}

#[tokio::test]
async fn test_expired_record_does_not_block_reissue() {
    let h = harness(&["111111", "222222"], false);

    h.service.issue("a@b.com").await.unwrap();
    h.clock.advance(Duration::minutes(11));

    // Well past both cooldown and expiry: re-issue must succeed.
    let issued = h.service.issue("a@b.com").await.unwrap();
    assert_eq!(issued.code, "222222");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_validation_consumes_exactly_once() {
    let h = harness(&["482913"], false);
    h.service.issue("a@b.com").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = h.service.clone();
        handles.push(tokio::spawn(async move {
            service.validate("a@b.com", "482913")
        }));
    }

    let mut successes = 0;
    let mut not_found = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(VerificationError::CodeNotFound) => not_found += 1,
            Err(other) => panic!("unexpected outcome: {:?}", other),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(not_found, 7);
}

#[tokio::test]
async fn test_issued_code_reports_resend_and_expiry_times() {
    let h = harness(&["482913"], false);
    let now = {
        use crate::services::verification::traits::Clock;
        h.clock.now()
    };

    let issued = h.service.issue("a@b.com").await.unwrap();
    assert_eq!(issued.expires_at, now + Duration::minutes(10));
    assert_eq!(issued.next_resend_at, now + Duration::seconds(60));
    assert!(issued.message_id.starts_with("mock-msg-"));
}

#[tokio::test]
async fn test_emails_are_tracked_independently() {
    let h = harness(&["111111", "222222"], false);

    h.service.issue("a@b.com").await.unwrap();
    h.service.issue("b@b.com").await.unwrap();

    let _ = h.service.validate("a@b.com", "000000");
    assert!(h.service.validate("b@b.com", "222222").is_ok());
    assert!(h.service.validate("a@b.com", "111111").is_ok());
}
