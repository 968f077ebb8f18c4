//! Form session: field values, validation and the message lifecycle.

mod error;
mod fields;
mod intent;
mod reducer;
mod session;
mod sink;
mod state;
mod timer;

pub use error::FormError;
pub use fields::{FieldName, FormFields};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use session::{Expiry, FormSession};
pub use sink::{MemorySink, SubmissionSink, TracingSink};
pub use state::{
    FormSnapshot, FormState, Generation, MessageTimings, SubmissionState, THANK_YOU_MESSAGE,
    VALIDATION_MESSAGE,
};
pub use timer::{Expired, ExpiryScheduler};
