//! Timer primitives: one-shot and repeating callbacks on a virtual clock.
//!
//! A [`TimerQueue`] does not run anything itself. The owner asks it which
//! timer is due with [`TimerQueue::pop_due`] and dispatches the returned
//! kind. Because the queue is re-examined after every dispatch, a callback
//! that cancels another timer stops that timer from firing in the same
//! pass.

/// Milliseconds on the host clock.
pub type Millis = u64;

/// Opaque handle to an armed timer. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// How a timer re-arms after firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Fires once and is removed.
    Once,
    /// Fires every `period` milliseconds until cleared.
    Every(Millis),
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub kind: K,
    /// Instant the timer was scheduled for (not the instant it was polled).
    pub deadline: Millis,
}

#[derive(Debug, Clone)]
struct Entry<K> {
    id: TimerId,
    kind: K,
    deadline: Millis,
    schedule: Schedule,
}

/// Set of armed timers tagged with a caller-defined kind.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: Copy + std::fmt::Debug> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a one-shot timer firing `delay` ms after `now`.
    pub fn set_timeout(&mut self, now: Millis, delay: Millis, kind: K) -> TimerId {
        self.arm(now.saturating_add(delay), Schedule::Once, kind)
    }

    /// Arm a repeating timer firing every `period` ms, first at `now + period`.
    ///
    /// A zero period is treated as 1 ms.
    pub fn set_interval(&mut self, now: Millis, period: Millis, kind: K) -> TimerId {
        let period = period.max(1);
        self.arm(now.saturating_add(period), Schedule::Every(period), kind)
    }

    fn arm(&mut self, deadline: Millis, schedule: Schedule, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        log::trace!("arm {kind:?} {id:?} at {deadline}ms ({schedule:?})");
        self.entries.push(Entry {
            id,
            kind,
            deadline,
            schedule,
        });
        id
    }

    /// Cancel a timer. Returns `false` if it was not armed.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of armed timers whose kind matches `pred`.
    pub fn count(&self, pred: impl Fn(&K) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.kind)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest armed deadline.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Take the earliest timer due at or before `now`.
    ///
    /// Ties on deadline go to the timer armed first. One-shot timers are
    /// removed; repeating timers are pushed to their next period.
    pub fn pop_due(&mut self, now: Millis) -> Option<Fired<K>> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(i, _)| i)?;

        let entry = &self.entries[pos];
        let fired = Fired {
            id: entry.id,
            kind: entry.kind,
            deadline: entry.deadline,
        };
        let schedule = entry.schedule;
        match schedule {
            Schedule::Once => {
                self.entries.remove(pos);
            },
            Schedule::Every(period) => {
                self.entries[pos].deadline = fired.deadline.saturating_add(period);
            },
        }
        Some(fired)
    }
}
