//! Virtual time for headless replays.

use std::time::Duration;

use carousel_model::TimerTicket;

#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    pending: Vec<(Duration, TimerTicket)>,
}

impl VirtualClock {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, ticket: TimerTicket) {
        self.pending.push((self.now + ticket.delay, ticket));
    }

    /// Remove the earliest ticket due at or before `deadline` and move the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerTicket> {
        let (position, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= deadline)
            .min_by_key(|(i, (due, _))| (*due, *i))?;
        let (due, ticket) = self.pending.remove(position);
        self.now = self.now.max(due);
        Some(ticket)
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
