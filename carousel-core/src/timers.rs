//! Cancel-and-replace timer bookkeeping.
//!
//! Each [`TimerKind`] has one generation counter. Scheduling or cancelling
//! bumps it, so any ticket handed out earlier is stale by the time it fires.

use std::time::Duration;

use carousel_model::{TimerKind, TimerTicket};

#[derive(Debug, Default, Clone)]
pub struct TimerSlots {
    generations: [u64; 3],
    pending: [bool; 3],
}

impl TimerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any outstanding timer of `kind` with a fresh one.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) -> TimerTicket {
        let slot = kind.slot();
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.pending[slot] = true;
        TimerTicket {
            kind,
            generation: self.generations[slot],
            delay,
        }
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        let slot = kind.slot();
        if self.pending[slot] {
            self.generations[slot] = self.generations[slot].wrapping_add(1);
            self.pending[slot] = false;
        }
    }

    /// Consume a fired ticket. Returns false when it was superseded or
    /// cancelled, in which case the caller must ignore it.
    pub fn accept(&mut self, ticket: TimerTicket) -> bool {
        let slot = ticket.kind.slot();
        if self.pending[slot] && self.generations[slot] == ticket.generation {
            self.pending[slot] = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending[kind.slot()]
    }
}
