//! One-shot deferred tick queue.
//!
//! Each running row keeps itself alive through a chain of one-shot
//! entries: firing a tick schedules the next one only while the row is
//! still running. Stopping a row is simply ceasing to reschedule; a
//! stale entry that fires afterwards is discarded by the running-flag
//! guard in the registry.

use std::time::{Duration, Instant};

/// Delay between two ticks of a running row.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Vec<(usize, Instant)>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick for `index`, due after `delay`.
    pub fn schedule(&mut self, index: usize, delay: Duration) {
        self.pending.push((index, Instant::now() + delay));
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return the indices of all entries due at `now`,
    /// in deadline order.
    pub fn take_due(&mut self, now: Instant) -> Vec<usize> {
        let mut due: Vec<(usize, Instant)> = Vec::new();
        self.pending.retain(|&(index, at)| {
            if at <= now {
                due.push((index, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, at)| at);
        due.into_iter().map(|(index, _)| index).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending entry (used when reset stops all timers).
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
