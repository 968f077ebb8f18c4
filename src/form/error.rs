use thiserror::Error;

/// Errors raised at the string boundary of the form API.
///
/// Validation failure is not one of them: an incomplete submit only shows
/// up as [`SubmissionState::ShowingError`](crate::form::SubmissionState).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown form field '{name}'")]
    UnknownField { name: String },
}
