use std::time::Instant;

use crate::form::fields::FieldName;
use crate::form::state::{Generation, MessageTimings};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Raw text for one field; masked before it is stored.
    FieldChanged { field: FieldName, raw: String },

    /// Validate and enter one of the transient message states.
    Submit {
        now: Instant,
        timings: MessageTimings,
    },

    /// A message timer fired. Ignored unless `generation` is current.
    Expired { generation: Generation },
}

impl Intent for FormIntent {}
