//! Memory-matching game.
//!
//! A deck of shuffled symbol pairs is turned over two tiles at a time. A pair
//! is resolved after a short delay: matching pairs stay face up for good,
//! mismatches turn back over. The first selection starts a stopwatch and a
//! countdown; the game is won when every pair is matched and lost when the
//! countdown reaches zero.
//!
//! All timing runs on the game's own [`Timeline`](crate::timeline::Timeline),
//! driven through [`Clocked::advance`](crate::timeline::Clocked::advance).

mod clock;
mod game;
mod tile;

pub use clock::{GameClock, DEFAULT_COUNTDOWN_SECS};
pub use game::{GameStatus, IgnoreReason, MemoryEvent, MemoryGame, Selection};
pub use tile::{Symbol, Tile};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Fruit images used by the default deck.
pub const DEFAULT_SYMBOLS: [&str; 8] = [
    "/Ananas.svg",
    "/Aubergine.svg",
    "/Banane.svg",
    "/Apfel.svg",
    "/Gurke.svg",
    "/Orange.svg",
    "/Zitrone.svg",
    "/Tomate.svg",
];

/// Errors from game construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("A memory deck needs at least one symbol")]
    EmptyDeck,

    #[error("Symbol appears more than once in the symbol set: {0}")]
    DuplicateSymbol(String),

    #[error("Symbol does not appear exactly twice in the deck: {0}")]
    UnpairedSymbol(String),

    #[error("Countdown budget must be at least one second")]
    ZeroCountdown,
}

/// Settings for a memory game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// One entry per pair.
    pub symbols: Vec<Symbol>,

    /// How long a flipped pair stays visible before it resolves.
    pub resolve_delay: Duration,

    /// Time budget in seconds.
    pub countdown_secs: u32,

    /// Period of the stopwatch and countdown ticks.
    pub tick: Duration,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| Symbol::new(*s)).collect(),
            resolve_delay: Duration::from_secs(1),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            tick: Duration::from_secs(1),
        }
    }
}

impl MemoryConfig {
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    pub fn with_countdown_secs(mut self, secs: u32) -> Self {
        self.countdown_secs = secs;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Check the symbol set and budget.
    pub fn validate(&self) -> Result<(), MemoryError> {
        if self.symbols.is_empty() {
            return Err(MemoryError::EmptyDeck);
        }
        if self.countdown_secs == 0 {
            return Err(MemoryError::ZeroCountdown);
        }
        let mut seen = HashSet::new();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(MemoryError::DuplicateSymbol(symbol.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MemoryConfig::default();
        assert_eq!(config.symbols.len(), 8);
        assert_eq!(config.countdown_secs, 60);
        assert_eq!(config.resolve_delay, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let empty = MemoryConfig::default().with_symbols(Vec::<Symbol>::new());
        assert_eq!(empty.validate(), Err(MemoryError::EmptyDeck));

        let dup = MemoryConfig::default().with_symbols(["/Apfel.svg", "/Apfel.svg"]);
        assert_eq!(
            dup.validate(),
            Err(MemoryError::DuplicateSymbol("/Apfel.svg".to_string()))
        );

        let no_time = MemoryConfig::default().with_countdown_secs(0);
        assert_eq!(no_time.validate(), Err(MemoryError::ZeroCountdown));
    }

    #[test]
    fn test_new_game_rejects_invalid_config() {
        let config = MemoryConfig::default().with_symbols(Vec::<Symbol>::new());
        assert_eq!(MemoryGame::new(config).unwrap_err(), MemoryError::EmptyDeck);
    }
}
