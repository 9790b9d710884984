//! Trailing-edge debouncer, independent of any timer runtime.
//!
//! The owner calls [`Debouncer::arm`] on every input event and gets a [`Ticket`]
//! back. It then sleeps for the delay on whatever executor it runs on and hands the
//! ticket to [`Debouncer::fire`]. Only the ticket from the latest `arm` yields the
//! pending value, and only once; earlier tickets were superseded by re-arming.

use std::time::Duration;

/// Handle identifying one `arm` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing whatever was pending.
    pub fn arm(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Called when the delay for `ticket` has elapsed. Returns the pending value if
    /// `ticket` is still the latest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }
}
