// timer module: clock abstraction and the single-shot debounce task
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time, so a
/// test can keep one handle and give another to the tracker.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Handle for a deferred run. Owned by the timer that armed it, so dropping
/// the timer is enough to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    due: Instant,
}

impl ScheduledTask {
    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    task: Option<ScheduledTask>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, task: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    // Arm once; returns false when a task is already waiting
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.task.is_some() {
            return false;
        }
        self.task = Some(ScheduledTask {
            due: now + self.delay,
        });
        true
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.task.map(|task| task.due())
    }

    // Fire the task if its time has come, disarming the timer
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.task {
            Some(task) if task.is_due(now) => {
                self.task = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) -> Option<ScheduledTask> {
        self.task.take()
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_is_single_shot() {
        let clock = ManualClock::new();
        let mut timer = DebounceTimer::default();

        assert!(timer.arm(clock.now()));
        let first = timer.deadline();
        clock.advance(Duration::from_millis(20));
        assert!(!timer.arm(clock.now()));
        assert_eq!(timer.deadline(), first);
    }

    #[test]
    fn test_take_due_waits_for_delay() {
        let clock = ManualClock::new();
        let mut timer = DebounceTimer::new(Duration::from_millis(50));
        timer.arm(clock.now());

        clock.advance(Duration::from_millis(49));
        assert!(!timer.take_due(clock.now()));
        clock.advance(Duration::from_millis(1));
        assert!(timer.take_due(clock.now()));
        assert!(!timer.is_armed());
        assert!(!timer.take_due(clock.now()));
    }

    #[test]
    fn test_cancel_disarms() {
        let clock = ManualClock::new();
        let mut timer = DebounceTimer::default();
        timer.arm(clock.now());

        assert!(timer.cancel().is_some());
        clock.advance(DEFAULT_DELAY);
        assert!(!timer.take_due(clock.now()));
        assert!(timer.cancel().is_none());
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_secs(1));
        assert_eq!(other.now() - before, Duration::from_secs(1));
    }
}
