use std::collections::{BTreeMap, HashMap};

/// Independent text-display target. Each owns at most one pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Detail,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub region: Region,
    pub due_ms: u64,
}

/// Single-threaded timer service driven by the UI loop.
///
/// Nothing runs on its own: the host calls [`TimerQueue::pop_due`] once per
/// frame with the current time. When a timer fires the queue clock moves to
/// that timer's deadline, so anything scheduled from the callback is spaced
/// from the deadline rather than from the frame time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    by_deadline: BTreeMap<(u64, u64), Region>,
    deadlines: HashMap<TimerHandle, u64>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, region: Region, delay_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let due = self.now_ms.saturating_add(delay_ms);
        self.by_deadline.insert((due, handle.0), region);
        self.deadlines.insert(handle, due);
        handle
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(due) => {
                self.by_deadline.remove(&(due, handle.0));
                true
            }
            None => false,
        }
    }

    /// Removes the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Fired> {
        let (&(due, _), _) = self.by_deadline.first_key_value()?;
        if due > now_ms {
            return None;
        }
        self.pop_first()
    }

    /// Fires the earliest pending timer regardless of the clock.
    pub fn fire_next(&mut self) -> Option<Fired> {
        self.pop_first()
    }

    /// Moves the clock forward once everything due has been handled.
    pub fn settle(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.by_deadline.keys().next().map(|&(due, _)| due)
    }

    pub fn pending_for(&self, region: Region) -> usize {
        self.by_deadline.values().filter(|&&r| r == region).count()
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    fn pop_first(&mut self) -> Option<Fired> {
        let ((due, id), region) = self.by_deadline.pop_first()?;
        let handle = TimerHandle(id);
        self.deadlines.remove(&handle);
        self.now_ms = self.now_ms.max(due);

        Some(Fired {
            handle,
            region,
            due_ms: due,
        })
    }
}
