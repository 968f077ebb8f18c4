//! Transitions of the form state.

use crate::form::fields::FormFields;
use crate::form::intent::FormIntent;
use crate::form::state::{FormState, SubmissionState, VALIDATION_MESSAGE};
use crate::mask::format_field;
use crate::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FieldChanged { field, raw } => {
                let mut fields = state.fields;
                fields.set(field, format_field(field, &raw));
                FormState { fields, ..state }
            }

            FormIntent::Submit { now, timings } => {
                let generation = state.generation + 1;
                let message = if state.fields.is_complete() {
                    SubmissionState::ShowingThankYou {
                        expires_at: now + timings.thank_you,
                        generation,
                    }
                } else {
                    SubmissionState::ShowingError {
                        message: VALIDATION_MESSAGE.to_string(),
                        expires_at: now + timings.error,
                        generation,
                    }
                };
                FormState {
                    fields: state.fields,
                    message,
                    generation,
                }
            }

            FormIntent::Expired { generation } => {
                if state.message.generation() != Some(generation) {
                    return state;
                }
                // The thank-you window ends the submission: fields go back to empty.
                let fields = if state.message.is_thank_you() {
                    FormFields::default()
                } else {
                    state.fields
                };
                FormState {
                    fields,
                    message: SubmissionState::Idle,
                    generation: state.generation,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::FieldName;
    use crate::form::state::MessageTimings;
    use std::time::{Duration, Instant};

    fn filled() -> FormState {
        let mut fields = FormFields::default();
        for field in FieldName::ALL {
            fields.set(field, "x".to_string());
        }
        FormState {
            fields,
            ..FormState::default()
        }
    }

    fn submit(state: FormState, now: Instant) -> FormState {
        FormReducer::reduce(
            state,
            FormIntent::Submit {
                now,
                timings: MessageTimings::default(),
            },
        )
    }

    #[test]
    fn field_change_masks_phone() {
        let state = FormReducer::reduce(
            FormState::default(),
            FormIntent::FieldChanged {
                field: FieldName::Phone,
                raw: "555123".to_string(),
            },
        );
        assert_eq!(state.fields.phone, "555-123");
        assert!(state.message.is_idle());
    }

    #[test]
    fn submit_incomplete_shows_error_for_three_seconds() {
        let now = Instant::now();
        let state = submit(FormState::default(), now);
        match state.message {
            SubmissionState::ShowingError {
                message,
                expires_at,
                generation,
            } => {
                assert_eq!(message, VALIDATION_MESSAGE);
                assert_eq!(expires_at, now + Duration::from_millis(3000));
                assert_eq!(generation, 1);
            }
            other => panic!("expected ShowingError, got {other:?}"),
        }
    }

    #[test]
    fn submit_complete_shows_thank_you_for_two_seconds() {
        let now = Instant::now();
        let state = submit(filled(), now);
        assert_eq!(
            state.message,
            SubmissionState::ShowingThankYou {
                expires_at: now + Duration::from_millis(2000),
                generation: 1,
            }
        );
        assert_eq!(state.fields, filled().fields);
    }

    #[test]
    fn thank_you_expiry_clears_fields() {
        let state = submit(filled(), Instant::now());
        let state = FormReducer::reduce(state, FormIntent::Expired { generation: 1 });
        assert!(state.message.is_idle());
        assert_eq!(state.fields, FormFields::default());
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn error_expiry_keeps_fields() {
        let mut start = FormState::default();
        start.fields.set(FieldName::Email, "a@b.c".to_string());
        let state = submit(start, Instant::now());
        let state = FormReducer::reduce(state, FormIntent::Expired { generation: 1 });
        assert!(state.message.is_idle());
        assert_eq!(state.fields.email, "a@b.c");
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let now = Instant::now();
        let state = submit(filled(), now);
        let state = submit(state, now + Duration::from_millis(500));
        let before = state.clone();
        let state = FormReducer::reduce(state, FormIntent::Expired { generation: 1 });
        assert_eq!(state, before);
    }

    #[test]
    fn expiry_while_idle_is_ignored() {
        let state = FormReducer::reduce(filled(), FormIntent::Expired { generation: 0 });
        assert_eq!(state, filled());
    }
}
