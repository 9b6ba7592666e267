//! Wall-clock driver for [`Clocked`] state machines.
//!
//! State machines only know virtual time. For an async host this module spawns
//! a tokio task that advances a shared state machine by the real time that
//! passed, once per period.

use crate::timeline::Clocked;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Default driver period. Fine enough for the 100 ms reading ticks.
pub const DEFAULT_DRIVE_PERIOD: Duration = Duration::from_millis(50);

/// Shortest accepted driver period.
pub const MIN_DRIVE_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running clock task. Dropping it stops the clock.
#[derive(Debug)]
pub struct ClockHandle {
    task: JoinHandle<()>,
}

impl ClockHandle {
    /// Stop advancing the state machine.
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Advance `state` in wall-clock time every `period`.
///
/// Must be called from within a tokio runtime. Periods below
/// [`MIN_DRIVE_PERIOD`] are raised to it.
pub fn spawn_clock<T>(state: Arc<Mutex<T>>, period: Duration) -> ClockHandle
where
    T: Clocked + Send + 'static,
{
    let period = period.max(MIN_DRIVE_PERIOD);
    let task = tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;
        let mut last = Instant::now();

        loop {
            interval.tick().await;
            let now = Instant::now();
            state.lock().await.advance(now - last);
            last = now;
        }
    });
    debug!(?period, "clock started");
    ClockHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::quiz::StoryQuiz;
    use crate::testing::quiz_story;

    #[derive(Default)]
    struct Elapsed(Duration);

    impl Clocked for Elapsed {
        fn advance(&mut self, by: Duration) {
            self.0 += by;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_advances_state() {
        let state = Arc::new(Mutex::new(Elapsed::default()));
        let handle = spawn_clock(Arc::clone(&state), Duration::from_millis(100));

        time::sleep(Duration::from_millis(1050)).await;
        assert_eq!(state.lock().await.0, Duration::from_millis(1000));
        assert!(handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_clock() {
        let state = Arc::new(Mutex::new(Elapsed::default()));
        let handle = spawn_clock(Arc::clone(&state), Duration::from_millis(100));
        time::sleep(Duration::from_millis(250)).await;
        drop(handle);

        let frozen = state.lock().await.0;
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(state.lock().await.0, frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let state = Arc::new(Mutex::new(Elapsed::default()));
        let handle = spawn_clock(Arc::clone(&state), Duration::ZERO);

        time::sleep(Duration::from_millis(20)).await;
        assert!(handle.is_running());
        assert!(state.lock().await.0 >= Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drives_reading_progress() {
        let mut quiz = StoryQuiz::new(vec![quiz_story("one", &[0])]).unwrap();
        quiz.start_reading();
        let quiz = Arc::new(Mutex::new(quiz));
        let handle = spawn_clock(Arc::clone(&quiz), DEFAULT_DRIVE_PERIOD);

        time::sleep(Duration::from_millis(6000)).await;
        handle.stop();
        assert_eq!(quiz.lock().await.reading_progress(), 100);
    }
}
