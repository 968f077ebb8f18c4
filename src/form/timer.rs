//! Message timers.
//!
//! A submit returns an [`Expiry`]; the scheduler sleeps on the tokio
//! runtime and then posts [`Expired`] into the caller's event channel, so
//! the expiry is handled on the same thread as every other event.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::form::session::Expiry;
use crate::form::state::Generation;

/// Posted when a message timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub generation: Generation,
}

/// Runs at most one message timer at a time.
///
/// Scheduling aborts the previous timer, and dropping the scheduler aborts
/// the pending one, so nothing fires after the session is torn down.
pub struct ExpiryScheduler<E> {
    runtime: Handle,
    events: Sender<E>,
    pending: Option<JoinHandle<()>>,
}

impl<E> ExpiryScheduler<E>
where
    E: From<Expired> + Send + 'static,
{
    pub fn new(runtime: Handle, events: Sender<E>) -> Self {
        Self {
            runtime,
            events,
            pending: None,
        }
    }

    pub fn schedule(&mut self, expiry: Expiry) {
        self.cancel();
        let events = self.events.clone();
        let Expiry { generation, delay } = expiry;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(Expired { generation }.into()).is_err() {
                tracing::trace!(generation, "Message timer fired after receiver closed");
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl<E> Drop for ExpiryScheduler<E> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
