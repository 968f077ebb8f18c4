//! Destinations for accepted submissions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::form::fields::FormFields;

/// Receives the field snapshot of every accepted submission.
///
/// Called once per successful submit, before the fields are cleared.
/// Fire-and-forget: the session never looks at what the sink does.
pub trait SubmissionSink: Send {
    fn accept(&self, fields: FormFields);
}

/// Writes each submission to the log as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accept(&self, fields: FormFields) {
        match serde_json::to_string(&fields) {
            Ok(json) => tracing::info!(submission = %json, "Form submitted"),
            Err(err) => tracing::warn!("Failed to serialize submission: {}", err),
        }
    }
}

/// Keeps submissions in memory. Clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    submissions: Arc<Mutex<Vec<FormFields>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<FormFields> {
        self.submissions.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.lock().is_empty()
    }
}

impl SubmissionSink for MemorySink {
    fn accept(&self, fields: FormFields) {
        self.submissions.lock().push(fields);
    }
}
