//! Virtual-time task scheduling.
//!
//! Every state machine in this crate owns a [`Timeline`] instead of relying on
//! ambient timers. Work that has to happen "later" (a match resolution, a quiz
//! feedback delay, a countdown tick) is scheduled as a task on the timeline and
//! addressed through a [`TaskHandle`] stored in the owning state.
//!
//! Time only moves when the owner calls [`Timeline::pop_due`] /
//! [`Timeline::settle`], which keeps every timed transition deterministic.
//! Dropping the owner drops the timeline and every outstanding task with it.

use std::time::Duration;

/// Periods shorter than this are clamped so a repeating task always makes progress.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled task.
///
/// Handles are unique within the timeline that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// A task waiting on the timeline.
#[derive(Debug, Clone)]
struct Scheduled<E> {
    id: u64,
    /// Tie order among tasks due at the same instant.
    seq: u64,
    due: Duration,
    period: Option<Duration>,
    event: E,
}

/// A per-instance virtual clock holding cancellable tasks.
#[derive(Debug, Clone)]
pub struct Timeline<E> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    tasks: Vec<Scheduled<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            tasks: Vec::new(),
        }
    }
}

impl<E: Clone> Timeline<E> {
    /// Create an empty timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Schedule `event` to fire once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TaskHandle {
        self.push(self.now + delay, None, event)
    }

    /// Schedule `event` to fire every `period`, first firing one period from now.
    pub fn schedule_every(&mut self, period: Duration, event: E) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        self.push(self.now + period, Some(period), event)
    }

    /// Cancel a task. Returns `false` if it already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != handle.0);
        self.tasks.len() != before
    }

    /// Cancel every outstanding task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Whether the task behind `handle` is still waiting.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.id == handle.0)
    }

    /// Time left until `handle` fires next, if it is still pending.
    pub fn remaining(&self, handle: TaskHandle) -> Option<Duration> {
        self.tasks
            .iter()
            .find(|t| t.id == handle.0)
            .map(|t| t.due.saturating_sub(self.now))
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's due time. Repeating tasks are rescheduled
    /// one period later before the event is handed out, so the caller may
    /// cancel them while handling the event. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;

        let task = &mut self.tasks[idx];
        if task.due > self.now {
            self.now = task.due;
        }

        match task.period {
            Some(period) => {
                let event = task.event.clone();
                task.due += period;
                // Move to the back of the tie order for its next slot.
                task.seq = self.next_seq;
                self.next_seq += 1;
                Some(event)
            }
            None => Some(self.tasks.remove(idx).event),
        }
    }

    /// Move the clock to `until` once all due tasks have been popped.
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, event: E) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(Scheduled {
            id,
            seq,
            due,
            period,
            event,
        });
        TaskHandle(id)
    }
}

/// Implemented by every state machine that owns a [`Timeline`].
pub trait Clocked {
    /// Move virtual time forward by `by`, firing every task that falls due.
    fn advance(&mut self, by: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timeline: &mut Timeline<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(e) = timeline.pop_due(until) {
            fired.push(e);
        }
        timeline.settle(until);
        fired
    }

    #[test]
    fn test_once_fires_after_delay() {
        let mut timeline = Timeline::new();
        let handle = timeline.schedule_once(Duration::from_secs(1), "resolve");

        assert!(drain(&mut timeline, Duration::from_millis(999)).is_empty());
        assert!(timeline.is_pending(handle));

        assert_eq!(drain(&mut timeline, Duration::from_secs(1)), vec!["resolve"]);
        assert!(!timeline.is_pending(handle));
        assert_eq!(timeline.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_every_repeats_until_cancelled() {
        let mut timeline = Timeline::new();
        let handle = timeline.schedule_every(Duration::from_secs(1), "tick");

        assert_eq!(drain(&mut timeline, Duration::from_secs(3)).len(), 3);
        assert!(timeline.cancel(handle));
        assert!(drain(&mut timeline, Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_cancel_fired_task_returns_false() {
        let mut timeline = Timeline::new();
        let handle = timeline.schedule_once(Duration::from_millis(10), "x");
        drain(&mut timeline, Duration::from_secs(1));
        assert!(!timeline.cancel(handle));
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut timeline = Timeline::new();
        timeline.schedule_every(Duration::from_secs(1), "stopwatch");
        timeline.schedule_every(Duration::from_secs(1), "countdown");

        let fired = drain(&mut timeline, Duration::from_secs(2));
        assert_eq!(fired, vec!["stopwatch", "countdown", "stopwatch", "countdown"]);
    }

    #[test]
    fn test_remaining() {
        let mut timeline = Timeline::new();
        let handle = timeline.schedule_once(Duration::from_millis(350), "commit");
        drain(&mut timeline, Duration::from_millis(100));
        assert_eq!(timeline.remaining(handle), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut timeline = Timeline::new();
        timeline.schedule_every(Duration::ZERO, "spin");
        assert_eq!(drain(&mut timeline, Duration::from_millis(5)).len(), 5);
    }
}
