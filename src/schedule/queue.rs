//! Timer queue implementation.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::events::AnnouncementId;

/// Handle for a scheduled task (its scheduling sequence number).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Deferred controller work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Finish resolving a revealed pair: flip back on mismatch, then unlock.
    ResolvePair {
        first: CardId,
        second: CardId,
        matched: bool,
    },
    /// Start a new game after the board is cleared.
    Reshuffle,
    /// Move cards to the positions assigned by the last reshuffle.
    PlaceCards,
    /// Retract an announcement from the live region.
    ExpireAnnouncement(AnnouncementId),
}

#[derive(Debug)]
struct Entry {
    due: u64,
    id: TimerId,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.id).cmp(&(other.due, other.id))
    }
}

/// Logical clock plus a min-queue of pending tasks.
///
/// Time is measured in milliseconds since the scheduler was created.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of tasks not yet fired.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Queue `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TimerId {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.schedule_at(self.now.saturating_add(delay_ms), task)
    }

    fn schedule_at(&mut self, due: u64, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        tracing::trace!(timer = id.0, due, ?task, "task scheduled");
        self.queue.push(Reverse(Entry { due, id, task }));
        id
    }

    /// Pop the next task due at or before `deadline`, moving the clock to
    /// its due time.
    ///
    /// Returns `None` once nothing more is due; call `settle` afterwards to
    /// bring the clock to the deadline.
    pub fn pop_due(&mut self, deadline: u64) -> Option<Task> {
        match self.queue.peek() {
            Some(Reverse(entry)) if entry.due <= deadline => {}
            _ => return None,
        }

        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        tracing::trace!(timer = entry.id.0, now = self.now, "task fired");
        Some(entry.task)
    }

    /// Move the clock forward to `deadline` without firing anything.
    pub fn settle(&mut self, deadline: u64) {
        self.now = self.now.max(deadline);
    }
}
