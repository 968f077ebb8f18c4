use std::time::{Duration, Instant};

use spidr_form::form::{
    FieldName, FormFields, FormSession, MemorySink, MessageTimings, SubmissionState,
    THANK_YOU_MESSAGE, VALIDATION_MESSAGE,
};

fn session_with_sink() -> (FormSession, MemorySink) {
    let sink = MemorySink::new();
    let session = FormSession::new(MessageTimings::default(), sink.clone());
    (session, sink)
}

fn fill(session: &mut FormSession) {
    session.on_field_change(FieldName::FirstName, "Charlotte");
    session.on_field_change(FieldName::LastName, "Weaver");
    session.on_field_change(FieldName::Phone, "(555) 123-4567");
    session.on_field_change(FieldName::Email, "charlotte@spidr.dev");
    session.on_field_change(FieldName::GuessCost, "129");
    session.on_field_change(FieldName::SpidrPin, "1111222233334444");
}

#[test]
fn masked_fields_are_stored_in_canonical_form() {
    let (mut session, _) = session_with_sink();
    fill(&mut session);
    assert_eq!(session.fields().phone, "555-123-4567");
    assert_eq!(session.fields().spidr_pin, "1111-2222-3333-4444");
    assert_eq!(session.fields().guess_cost, "129");
}

#[test]
fn named_field_change_uses_literal_names() {
    let (mut session, _) = session_with_sink();
    session.on_named_field_change("spidrPin", "12").unwrap();
    session.on_named_field_change("guessCost", " 99 ").unwrap();
    assert_eq!(session.fields().spidr_pin, "12");
    assert_eq!(session.fields().guess_cost, " 99 ");
}

#[test]
fn any_empty_field_shows_error_and_keeps_fields() {
    for missing in FieldName::ALL {
        let (mut session, sink) = session_with_sink();
        fill(&mut session);
        session.on_field_change(missing, "");
        let before = session.fields().clone();

        let now = Instant::now();
        let expiry = session.on_submit_at(now);

        match session.message() {
            SubmissionState::ShowingError {
                message,
                expires_at,
                ..
            } => {
                assert_eq!(message, VALIDATION_MESSAGE);
                assert_eq!(*expires_at, now + Duration::from_millis(3000));
            }
            other => panic!("expected ShowingError for {missing}, got {other:?}"),
        }
        assert_eq!(expiry.delay, Duration::from_millis(3000));
        assert_eq!(session.fields(), &before);
        assert!(sink.is_empty());
    }
}

#[test]
fn error_clears_after_its_window() {
    let (mut session, _) = session_with_sink();
    session.on_field_change(FieldName::Email, "kept@spidr.dev");
    let expiry = session.on_submit();
    assert!(session.on_expired(expiry.generation));
    assert!(session.message().is_idle());
    assert_eq!(session.fields().email, "kept@spidr.dev");
}

#[test]
fn complete_submit_hands_off_snapshot_then_resets() {
    let (mut session, sink) = session_with_sink();
    fill(&mut session);
    let submitted = session.fields().clone();

    let now = Instant::now();
    let expiry = session.on_submit_at(now);

    assert_eq!(
        session.message(),
        &SubmissionState::ShowingThankYou {
            expires_at: now + Duration::from_millis(2000),
            generation: expiry.generation,
        }
    );
    assert_eq!(session.message().text(), Some(THANK_YOU_MESSAGE));
    assert_eq!(expiry.delay, Duration::from_millis(2000));
    // Handed off before clearing; fields still visible during the window.
    assert_eq!(sink.submissions(), vec![submitted.clone()]);
    assert_eq!(session.fields(), &submitted);

    assert!(session.on_expired(expiry.generation));
    assert!(session.message().is_idle());
    assert_eq!(session.fields(), &FormFields::default());
}

#[test]
fn whitespace_only_fields_are_accepted() {
    let (mut session, sink) = session_with_sink();
    for field in FieldName::ALL {
        session.on_field_change(field, "   ");
    }
    // Masked fields drop whitespace entirely, so they need digits.
    session.on_field_change(FieldName::Phone, "5");
    session.on_field_change(FieldName::SpidrPin, "1");

    session.on_submit();
    assert!(session.message().is_thank_you());
    assert_eq!(sink.len(), 1);
}

#[test]
fn second_submit_governs_after_rapid_resubmit() {
    let (mut session, sink) = session_with_sink();
    fill(&mut session);

    let first = session.on_submit();
    let second = session.on_submit();
    assert!(second.generation > first.generation);
    assert_eq!(sink.len(), 2);

    // First timer fires late: nothing happens.
    assert!(!session.on_expired(first.generation));
    assert!(session.message().is_thank_you());
    assert_eq!(session.fields().first_name, "Charlotte");

    assert!(session.on_expired(second.generation));
    assert!(session.message().is_idle());
    assert_eq!(session.fields(), &FormFields::default());
}

#[test]
fn stale_thank_you_timer_does_not_clear_after_error() {
    let (mut session, _) = session_with_sink();
    fill(&mut session);
    let accepted = session.on_submit();

    session.on_field_change(FieldName::Email, "");
    let rejected = session.on_submit();
    assert!(session.message().is_error());

    assert!(!session.on_expired(accepted.generation));
    assert_eq!(session.fields().first_name, "Charlotte");
    assert!(session.message().is_error());

    assert!(session.on_expired(rejected.generation));
    assert!(session.message().is_idle());
    assert_eq!(session.fields().first_name, "Charlotte");
}

#[test]
fn snapshot_reflects_current_state() {
    let (mut session, _) = session_with_sink();
    session.on_field_change(FieldName::Phone, "555123");
    session.on_submit();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.fields.phone, "555-123");
    assert!(snapshot.message.is_error());
}

#[test]
fn custom_timings_drive_expiry_delay() {
    let timings = MessageTimings {
        error: Duration::from_millis(10),
        thank_you: Duration::from_millis(20),
    };
    let mut session = FormSession::new(timings, MemorySink::new());
    assert_eq!(session.on_submit().delay, Duration::from_millis(10));
    fill(&mut session);
    assert_eq!(session.on_submit().delay, Duration::from_millis(20));
}
