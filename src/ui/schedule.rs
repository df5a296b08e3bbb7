//! Delayed event queue for UI pacing
//!
//! The game core is synchronous; anything that should happen "a moment
//! later" (the computer's reply, the result announcement, the board reset)
//! is queued here with a due time and drained when the UI polls with the
//! current time. Callers pass the clock in, so tests can drive it.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Scheduled<E> {
    due: Instant,
    seq: u64,
    event: E,
}

/// Queue of events ordered by due time, FIFO among equal due times.
#[derive(Debug)]
pub struct Scheduler<E> {
    queue: Vec<Scheduled<E>>,
    next_seq: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            next_seq: 0,
        }
    }

    /// Queue `event` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) {
        self.queue.push(Scheduled {
            due: now + delay,
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }

    /// Remove and return the earliest event due at or before `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<E> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= now)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;
        Some(self.queue.remove(idx).event)
    }

    /// Due time of the earliest pending event
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|s| s.due).min()
    }

    /// Time left until the earliest pending event (zero if already due)
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_duration_since(now))
    }

    /// Drop every pending event
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_event_not_due_early() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, 500 * MS, "reply");

        assert_eq!(sched.pop_due(t0), None);
        assert_eq!(sched.pop_due(t0 + 499 * MS), None);
        assert_eq!(sched.pop_due(t0 + 500 * MS), Some("reply"));
        assert!(sched.is_empty());
    }

    #[test]
    fn test_events_in_due_order() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, 300 * MS, "late");
        sched.schedule(t0, 100 * MS, "early");

        let later = t0 + 1000 * MS;
        assert_eq!(sched.pop_due(later), Some("early"));
        assert_eq!(sched.pop_due(later), Some("late"));
        assert_eq!(sched.pop_due(later), None);
    }

    #[test]
    fn test_fifo_for_equal_due_times() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, Duration::ZERO, 1);
        sched.schedule(t0, Duration::ZERO, 2);
        sched.schedule(t0, Duration::ZERO, 3);

        assert_eq!(sched.pop_due(t0), Some(1));
        assert_eq!(sched.pop_due(t0), Some(2));
        assert_eq!(sched.pop_due(t0), Some(3));
    }

    #[test]
    fn test_time_until_next_and_clear() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        assert_eq!(sched.time_until_next(t0), None);

        sched.schedule(t0, 200 * MS, ());
        assert_eq!(sched.time_until_next(t0 + 50 * MS), Some(150 * MS));
        assert_eq!(sched.time_until_next(t0 + 900 * MS), Some(Duration::ZERO));
        assert_eq!(sched.len(), 1);

        sched.clear();
        assert!(sched.is_empty());
        assert_eq!(sched.next_due(), None);
    }
}
