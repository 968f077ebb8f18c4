//! The form session controller.
//!
//! Owns the field values and the message state. All mutation goes through
//! [`FormSession::on_field_change`], [`FormSession::on_submit`] and
//! [`FormSession::on_expired`]; each call runs to completion before the
//! next, so the session needs no locking.

use std::time::{Duration, Instant};

use crate::form::error::FormError;
use crate::form::fields::{FieldName, FormFields};
use crate::form::intent::FormIntent;
use crate::form::reducer::FormReducer;
use crate::form::sink::SubmissionSink;
use crate::form::state::{FormSnapshot, FormState, Generation, MessageTimings, SubmissionState};
use crate::mvi::Reducer;

/// Timer request produced by a submit.
///
/// The caller arranges for [`FormSession::on_expired`] to be invoked with
/// `generation` once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub generation: Generation,
    pub delay: Duration,
}

pub struct FormSession {
    state: FormState,
    timings: MessageTimings,
    sink: Box<dyn SubmissionSink>,
}

impl FormSession {
    pub fn new(timings: MessageTimings, sink: impl SubmissionSink + 'static) -> Self {
        Self {
            state: FormState::default(),
            timings,
            sink: Box::new(sink),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.state.fields
    }

    pub fn message(&self) -> &SubmissionState {
        &self.state.message
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.state.fields.clone(),
            message: self.state.message.clone(),
        }
    }

    /// Store `raw` for `field`, masked if the field has a mask.
    pub fn on_field_change(&mut self, field: FieldName, raw: &str) {
        self.dispatch(FormIntent::FieldChanged {
            field,
            raw: raw.to_string(),
        });
    }

    /// Same as [`on_field_change`](Self::on_field_change) for a literal field name.
    pub fn on_named_field_change(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let field = name.parse::<FieldName>()?;
        self.on_field_change(field, raw);
        Ok(())
    }

    pub fn on_submit(&mut self) -> Expiry {
        self.on_submit_at(Instant::now())
    }

    /// Validate the fields and enter the error or thank-you state.
    ///
    /// On success the snapshot goes to the sink right away; the fields are
    /// only cleared when the returned expiry comes back.
    pub fn on_submit_at(&mut self, now: Instant) -> Expiry {
        self.dispatch(FormIntent::Submit {
            now,
            timings: self.timings,
        });
        let generation = self.state.generation;

        let delay = match &self.state.message {
            SubmissionState::ShowingThankYou { .. } => {
                tracing::info!(generation, "Submission accepted");
                self.sink.accept(self.state.fields.clone());
                self.timings.thank_you
            }
            SubmissionState::ShowingError { .. } => {
                let missing: Vec<&str> = self
                    .state
                    .fields
                    .missing()
                    .into_iter()
                    .map(FieldName::as_str)
                    .collect();
                tracing::debug!(generation, ?missing, "Submission rejected");
                self.timings.error
            }
            // Submit always enters one of the two message states.
            SubmissionState::Idle => unreachable!("submit left the form idle"),
        };

        Expiry { generation, delay }
    }

    /// Handle a fired timer. Returns false when the timer was superseded.
    pub fn on_expired(&mut self, generation: Generation) -> bool {
        if self.state.message.generation() != Some(generation) {
            tracing::trace!(
                generation,
                current = self.state.generation,
                "Ignoring stale message timer"
            );
            return false;
        }
        self.dispatch(FormIntent::Expired { generation });
        true
    }

    fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::sink::MemorySink;

    #[test]
    fn new_session_starts_empty_and_idle() {
        let session = FormSession::new(MessageTimings::default(), MemorySink::new());
        assert_eq!(session.fields(), &FormFields::default());
        assert!(session.message().is_idle());
    }

    #[test]
    fn named_field_change_rejects_unknown_names() {
        let mut session = FormSession::new(MessageTimings::default(), MemorySink::new());
        let err = session.on_named_field_change("zip", "12345").unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                name: "zip".to_string()
            }
        );
        assert_eq!(session.fields(), &FormFields::default());
    }

    #[test]
    fn every_submit_schedules_a_nonzero_timer() {
        let sink = MemorySink::new();
        let mut session = FormSession::new(MessageTimings::default(), sink.clone());
        let rejected = session.on_submit();
        assert!(session.message().is_error());
        assert!(rejected.delay > Duration::ZERO);

        for field in FieldName::ALL {
            session.on_field_change(field, "1");
        }
        let accepted = session.on_submit();
        assert!(session.message().is_thank_you());
        assert_eq!(accepted.delay, Duration::from_millis(2000));
        assert_eq!(accepted.generation, rejected.generation + 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn rejected_submit_does_not_reach_sink() {
        let sink = MemorySink::new();
        let mut session = FormSession::new(MessageTimings::default(), sink.clone());
        let expiry = session.on_submit();
        assert_eq!(expiry.generation, 1);
        assert_eq!(expiry.delay, Duration::from_millis(3000));
        assert!(sink.is_empty());
    }
}
