//! State owned by the form session.

use std::time::{Duration, Instant};

use crate::form::fields::FormFields;
use crate::mvi::UiState;

/// Message shown when a submit finds an empty field.
pub const VALIDATION_MESSAGE: &str = "Please fill out all fields before submitting.";

/// Message shown after a successful submit.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your submission!";

/// Monotonic token identifying one submit and the timer it started.
pub type Generation = u64;

/// How long each transient message stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTimings {
    pub error: Duration,
    pub thank_you: Duration,
}

impl Default for MessageTimings {
    fn default() -> Self {
        Self {
            error: Duration::from_millis(3000),
            thank_you: Duration::from_millis(2000),
        }
    }
}

/// Message currently shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,

    /// A submit found an empty field.
    ShowingError {
        message: String,
        expires_at: Instant,
        generation: Generation,
    },

    /// A submit was accepted; fields are cleared when this expires.
    ShowingThankYou {
        expires_at: Instant,
        generation: Generation,
    },
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::ShowingError { .. })
    }

    pub fn is_thank_you(&self) -> bool {
        matches!(self, Self::ShowingThankYou { .. })
    }

    /// Text to display, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::ShowingError { message, .. } => Some(message),
            Self::ShowingThankYou { .. } => Some(THANK_YOU_MESSAGE),
        }
    }

    /// Generation of the submit that produced this message.
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Self::Idle => None,
            Self::ShowingError { generation, .. } | Self::ShowingThankYou { generation, .. } => {
                Some(*generation)
            }
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        match self {
            Self::Idle => None,
            Self::ShowingError { expires_at, .. } | Self::ShowingThankYou { expires_at, .. } => {
                Some(*expires_at)
            }
        }
    }
}

/// Everything the form reducer transforms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub fields: FormFields,
    pub message: SubmissionState,
    /// Generation of the most recent submit; 0 before the first one.
    pub generation: Generation,
}

impl UiState for FormState {}

/// Read-only copy handed to the renderer after each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub message: SubmissionState,
}
