use crate::form::{
    Expiry, ExpiryScheduler, FieldName, FormSession, FormSnapshot, Generation, SubmissionState,
};
use crate::ui::events::AppEvent;

pub struct App {
    should_quit: bool,
    focus: FieldName,
    show_logo: bool,
    /// Field values and message state; all edits go through it.
    session: FormSession,
    /// Message timer (resource, managed outside the session).
    scheduler: Option<ExpiryScheduler<AppEvent>>,
}

impl App {
    pub fn new(session: FormSession, show_logo: bool) -> Self {
        Self {
            should_quit: false,
            focus: FieldName::FirstName,
            show_logo,
            session,
            scheduler: None,
        }
    }

    /// Attach the timer that turns submits into expiry events.
    pub fn attach_scheduler(&mut self, scheduler: ExpiryScheduler<AppEvent>) {
        self.scheduler = Some(scheduler);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_logo(&self) -> bool {
        self.show_logo
    }

    pub fn focus(&self) -> FieldName {
        self.focus
    }

    pub fn set_focus(&mut self, field: FieldName) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.session.snapshot()
    }

    pub fn message(&self) -> &SubmissionState {
        self.session.message()
    }

    /// Append typed or pasted text to the focused field.
    pub fn insert_str(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return;
        }
        let mut raw = self.session.fields().get(self.focus).to_string();
        raw.push_str(&text);
        self.session.on_field_change(self.focus, &raw);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Remove the last character of the focused field.
    ///
    /// The result is re-masked, so deleting into a separator also drops
    /// the separator.
    pub fn backspace(&mut self) {
        let mut raw = self.session.fields().get(self.focus).to_string();
        if raw.pop().is_none() {
            return;
        }
        self.session.on_field_change(self.focus, &raw);
    }

    pub fn clear_field(&mut self) {
        self.session.on_field_change(self.focus, "");
    }

    pub fn submit(&mut self) -> Expiry {
        let expiry = self.session.on_submit();
        match &mut self.scheduler {
            Some(scheduler) => scheduler.schedule(expiry),
            None => tracing::warn!(
                generation = expiry.generation,
                "No message timer attached; message will not expire"
            ),
        }
        expiry
    }

    pub fn on_message_expired(&mut self, generation: Generation) -> bool {
        self.session.on_expired(generation)
    }
}
