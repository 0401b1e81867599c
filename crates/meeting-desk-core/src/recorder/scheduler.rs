use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};

/// Handle to a scheduled timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Logical-time timer queue.
///
/// Time only moves when the owner says so, via [`Scheduler::pop_due`] and
/// [`Scheduler::advance_to`]. Timers due at the same instant fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), E>,
    deadlines: HashMap<TimerId, Duration>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<E> Scheduler<E> {
    /// An empty scheduler at logical time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still pending.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// When `id` is due, if it is still pending.
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.deadlines.get(&id).copied()
    }

    /// Fire `event` once, `after` from now.
    pub fn schedule(&mut self, after: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let due = self.now.saturating_add(after);
        self.queue.insert((due, id), event);
        self.deadlines.insert(id, due);
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    /// Remove the earliest timer due at or before `until`, moving the clock
    /// to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let (due, id) = *self.queue.first_key_value()?.0;
        if due > until {
            return None;
        }

        let event = self.queue.remove(&(due, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(due);
        Some(event)
    }

    /// Move the clock forward to `target`. Never moves backwards.
    pub fn advance_to(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    /// Cancel everything. Returns how many timers were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        self.deadlines.clear();
        dropped
    }
}
