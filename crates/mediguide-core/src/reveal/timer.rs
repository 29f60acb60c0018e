//! Timer seam and a deterministic virtual clock

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::session::Generation;

/// A scheduled step delivery, tagged with the session generation it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tick {
    pub generation: Generation,
}

impl Tick {
    pub fn new(generation: Generation) -> Self {
        Self { generation }
    }
}

/// Schedule-after-delay primitive supplied by the runtime.
///
/// Each call must eventually deliver `tick` back to the scheduler exactly
/// once, in delay order relative to other ticks it scheduled.
pub trait Timer {
    fn after(&mut self, delay: Duration, tick: Tick);
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn after(&mut self, delay: Duration, tick: Tick) {
        (**self).after(delay, tick)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    due: Duration,
    seq: u64,
    tick: Tick,
}

/// In-memory timer with virtual time.
///
/// Ticks come out ordered by due time, then by the order they were
/// scheduled. Nothing fires until the clock is popped.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the clock was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of ticks not yet delivered
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending tick
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(p)| p.due)
    }

    /// Jump to the earliest pending tick and deliver it
    pub fn pop_next(&mut self) -> Option<Tick> {
        let Reverse(pending) = self.queue.pop()?;
        self.now = self.now.max(pending.due);
        Some(pending.tick)
    }

    /// Deliver the earliest tick if it is due at or before `deadline`.
    ///
    /// Time only moves to the delivered tick's due time, so a follow-up the
    /// caller schedules while stepping it is timed from the right instant.
    /// When nothing is due, time moves to `deadline` and `None` comes back.
    pub fn pop_until(&mut self, deadline: Duration) -> Option<Tick> {
        match self.next_due() {
            Some(due) if due <= deadline => self.pop_next(),
            _ => {
                self.now = self.now.max(deadline);
                None
            }
        }
    }
}

impl Timer for VirtualClock {
    fn after(&mut self, delay: Duration, tick: Tick) {
        let pending = Pending {
            due: self.now + delay,
            seq: self.seq,
            tick,
        };
        self.seq += 1;
        self.queue.push(Reverse(pending));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(n: u64) -> Tick {
        Tick::new(Generation::from_raw(n))
    }

    #[test]
    fn test_delay_order() {
        let mut clock = VirtualClock::new();
        clock.after(Duration::from_millis(300), tick(1));
        clock.after(Duration::ZERO, tick(2));
        clock.after(Duration::from_millis(100), tick(3));

        assert_eq!(clock.pop_next(), Some(tick(2)));
        assert_eq!(clock.pop_next(), Some(tick(3)));
        assert_eq!(clock.now(), Duration::from_millis(100));
        assert_eq!(clock.pop_next(), Some(tick(1)));
        assert_eq!(clock.pop_next(), None);
    }

    #[test]
    fn test_same_due_keeps_schedule_order() {
        let mut clock = VirtualClock::new();
        clock.after(Duration::from_millis(50), tick(7));
        clock.after(Duration::from_millis(50), tick(3));
        assert_eq!(clock.pop_next(), Some(tick(7)));
        assert_eq!(clock.pop_next(), Some(tick(3)));
    }

    #[test]
    fn test_pop_until() {
        let mut clock = VirtualClock::new();
        clock.after(Duration::from_millis(100), tick(1));
        clock.after(Duration::from_millis(500), tick(2));

        let deadline = Duration::from_millis(200);
        assert_eq!(clock.pop_until(deadline), Some(tick(1)));
        assert_eq!(clock.now(), Duration::from_millis(100));
        assert_eq!(clock.pop_until(deadline), None);
        assert_eq!(clock.now(), deadline);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_due(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_follow_up_timed_from_delivery() {
        let mut clock = VirtualClock::new();
        clock.after(Duration::ZERO, tick(1));

        let deadline = Duration::from_millis(1000);
        assert_eq!(clock.pop_until(deadline), Some(tick(1)));
        clock.after(Duration::from_millis(300), tick(2));
        assert_eq!(clock.next_due(), Some(Duration::from_millis(300)));
    }

    #[test]
    fn test_pop_until_never_rewinds() {
        let mut clock = VirtualClock::new();
        clock.after(Duration::from_millis(50), tick(1));
        assert_eq!(clock.pop_next(), Some(tick(1)));
        assert_eq!(clock.pop_until(Duration::from_millis(10)), None);
        assert_eq!(clock.now(), Duration::from_millis(50));
    }
}
