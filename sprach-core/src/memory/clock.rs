//! Stopwatch and countdown state of a memory game.

use serde::{Deserialize, Serialize};

/// Time budget of a game in seconds.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;

/// Elapsed time and remaining budget.
///
/// Won and expired are mutually exclusive; the game tracks the win, the clock
/// tracks expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameClock {
    pub elapsed_seconds: u32,
    pub countdown_seconds: u32,
    pub is_running: bool,
    pub is_expired: bool,
}

impl GameClock {
    /// Start from zero with a full budget.
    pub fn start(&mut self, budget_secs: u32) {
        *self = GameClock {
            elapsed_seconds: 0,
            countdown_seconds: budget_secs,
            is_running: true,
            is_expired: false,
        };
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    pub fn tick_elapsed(&mut self) {
        if self.is_running {
            self.elapsed_seconds += 1;
        }
    }

    /// Count down one second. Returns `true` when the budget just ran out.
    pub fn tick_countdown(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.countdown_seconds = self.countdown_seconds.saturating_sub(1);
        if self.countdown_seconds == 0 {
            self.is_running = false;
            self.is_expired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_expires_after_budget() {
        let mut clock = GameClock::default();
        clock.start(3);
        assert!(!clock.tick_countdown());
        assert!(!clock.tick_countdown());
        assert!(clock.tick_countdown());
        assert!(clock.is_expired);
        assert!(!clock.is_running);
        // Further ticks are inert.
        assert!(!clock.tick_countdown());
        assert_eq!(clock.countdown_seconds, 0);
    }

    #[test]
    fn test_stopped_clock_ignores_ticks() {
        let mut clock = GameClock::default();
        clock.start(DEFAULT_COUNTDOWN_SECS);
        clock.tick_elapsed();
        clock.stop();
        clock.tick_elapsed();
        assert_eq!(clock.elapsed_seconds, 1);
        assert!(!clock.is_expired);
    }
}
