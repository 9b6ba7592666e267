//! The memory game state machine.

use super::clock::GameClock;
use super::tile::{Symbol, Tile};
use super::{MemoryConfig, MemoryError};
use crate::timeline::{Clocked, TaskHandle, Timeline};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Dealt, no tile selected yet.
    Idle,
    Running,
    Won,
    Expired,
}

/// Why a tile selection was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Expired,
    Won,
    OutOfRange,
    AlreadyFaceUp,
    /// Two tiles are waiting for the resolution delay.
    Resolving,
}

/// Result of [`MemoryGame::select_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First tile of a pair turned over.
    Flipped,
    /// Second tile turned over; resolution is pending.
    PairFlipped,
    Ignored(IgnoreReason),
}

/// Something the host may want to react to (sound, persistence, banners).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryEvent {
    Started,
    Matched { first: usize, second: usize },
    Mismatched { first: usize, second: usize },
    Won { seconds: u32, moves: u32, new_best: bool },
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryTask {
    StopwatchTick,
    CountdownTick,
    Resolve,
}

/// A memory-matching game over shuffled symbol pairs.
#[derive(Debug)]
pub struct MemoryGame {
    config: MemoryConfig,
    tiles: Vec<Tile>,
    /// Face-up tiles awaiting resolution, in selection order.
    unresolved: Vec<usize>,
    moves: u32,
    clock: GameClock,
    won: bool,
    best_time: Option<u32>,
    events: Vec<MemoryEvent>,
    timeline: Timeline<MemoryTask>,
    stopwatch: Option<TaskHandle>,
    countdown: Option<TaskHandle>,
    resolution: Option<TaskHandle>,
    rng: StdRng,
}

impl MemoryGame {
    /// Deal a new game with a randomly seeded shuffle.
    pub fn new(config: MemoryConfig) -> Result<Self, MemoryError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deal a new game with a reproducible shuffle.
    pub fn with_seed(config: MemoryConfig, seed: u64) -> Result<Self, MemoryError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Use an explicit deck order instead of shuffling.
    ///
    /// Every symbol must appear exactly twice. Later resets shuffle normally.
    pub fn from_deck(config: MemoryConfig, deck: Vec<Symbol>) -> Result<Self, MemoryError> {
        let mut counts: HashMap<&Symbol, usize> = HashMap::new();
        for symbol in &deck {
            *counts.entry(symbol).or_default() += 1;
        }
        if let Some((symbol, _)) = counts.iter().find(|(_, n)| **n != 2) {
            return Err(MemoryError::UnpairedSymbol(symbol.to_string()));
        }

        let mut config = config;
        let mut symbols: Vec<Symbol> = counts.into_keys().cloned().collect();
        symbols.sort();
        config.symbols = symbols;
        config.validate()?;

        let mut game = Self::with_rng(config, StdRng::from_entropy())?;
        game.tiles = deck
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Tile::new(id, symbol))
            .collect();
        Ok(game)
    }

    fn with_rng(config: MemoryConfig, mut rng: StdRng) -> Result<Self, MemoryError> {
        config.validate()?;
        let tiles = deal(&config.symbols, &mut rng);
        Ok(Self {
            config,
            tiles,
            unresolved: Vec::with_capacity(2),
            moves: 0,
            clock: GameClock::default(),
            won: false,
            best_time: None,
            events: Vec::new(),
            timeline: Timeline::new(),
            stopwatch: None,
            countdown: None,
            resolution: None,
            rng,
        })
    }

    /// Seed the best time read from storage.
    pub fn with_best_time(mut self, best_time: Option<u32>) -> Self {
        self.best_time = best_time;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    /// Indices of face-up tiles that are not yet resolved.
    pub fn unresolved(&self) -> &[usize] {
        &self.unresolved
    }

    /// Whether a resolution is pending.
    pub fn is_resolving(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_matched).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.clock.is_expired {
            GameStatus::Expired
        } else if self.clock.is_running {
            GameStatus::Running
        } else {
            GameStatus::Idle
        }
    }

    /// Number of scheduled tasks (ticks and pending resolution).
    pub fn pending_tasks(&self) -> usize {
        self.timeline.pending()
    }

    /// Take every event produced since the last call.
    pub fn drain_events(&mut self) -> Vec<MemoryEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Turn a tile face up.
    ///
    /// Locked tiles, a pending resolution and finished games make this a no-op.
    pub fn select_tile(&mut self, index: usize) -> Selection {
        if let Some(reason) = self.selection_blocker(index) {
            debug!(index, ?reason, "tile selection ignored");
            return Selection::Ignored(reason);
        }

        if !self.clock.is_running {
            self.start_clock();
        }

        self.tiles[index].is_flipped = true;
        self.unresolved.push(index);

        if self.unresolved.len() < 2 {
            return Selection::Flipped;
        }

        self.moves += 1;
        self.resolution = Some(
            self.timeline
                .schedule_once(self.config.resolve_delay, MemoryTask::Resolve),
        );
        debug!(moves = self.moves, pair = ?self.unresolved, "pair flipped");
        Selection::PairFlipped
    }

    /// Deal a fresh board. The best time is kept.
    pub fn reset(&mut self) {
        self.timeline.cancel_all();
        self.stopwatch = None;
        self.countdown = None;
        self.resolution = None;

        self.tiles = deal(&self.config.symbols, &mut self.rng);
        self.unresolved.clear();
        self.moves = 0;
        self.clock = GameClock::default();
        self.won = false;
        self.events.clear();
        debug!(tiles = self.tiles.len(), "memory game reset");
    }

    fn selection_blocker(&self, index: usize) -> Option<IgnoreReason> {
        if self.clock.is_expired {
            return Some(IgnoreReason::Expired);
        }
        if self.won {
            return Some(IgnoreReason::Won);
        }
        let tile = match self.tiles.get(index) {
            Some(tile) => tile,
            None => return Some(IgnoreReason::OutOfRange),
        };
        if tile.is_face_up() {
            return Some(IgnoreReason::AlreadyFaceUp);
        }
        if self.unresolved.len() >= 2 {
            return Some(IgnoreReason::Resolving);
        }
        None
    }

    fn start_clock(&mut self) {
        self.clock.start(self.config.countdown_secs);
        self.stopwatch = Some(
            self.timeline
                .schedule_every(self.config.tick, MemoryTask::StopwatchTick),
        );
        self.countdown = Some(
            self.timeline
                .schedule_every(self.config.tick, MemoryTask::CountdownTick),
        );
        self.events.push(MemoryEvent::Started);
        debug!(budget = self.config.countdown_secs, "clock started");
    }

    fn handle(&mut self, task: MemoryTask) {
        match task {
            MemoryTask::StopwatchTick => self.clock.tick_elapsed(),
            MemoryTask::CountdownTick => {
                if self.clock.tick_countdown() {
                    self.expire();
                }
            }
            MemoryTask::Resolve => self.resolve(),
        }
    }

    fn resolve(&mut self) {
        self.resolution = None;
        let (first, second) = match self.unresolved[..] {
            [first, second] => (first, second),
            _ => {
                self.unresolved.clear();
                return;
            }
        };
        self.unresolved.clear();

        if self.tiles[first].symbol == self.tiles[second].symbol {
            self.tiles[first].is_matched = true;
            self.tiles[second].is_matched = true;
            self.events.push(MemoryEvent::Matched { first, second });
            debug!(first, second, "pair matched");
        } else {
            self.tiles[first].is_flipped = false;
            self.tiles[second].is_flipped = false;
            self.events.push(MemoryEvent::Mismatched { first, second });
            debug!(first, second, "pair mismatched");
        }

        if self.clock.is_running && self.tiles.iter().all(|t| t.is_matched) {
            self.win();
        }
    }

    fn win(&mut self) {
        self.cancel_ticks();
        self.clock.stop();
        self.won = true;

        let seconds = self.clock.elapsed_seconds;
        let new_best = self.best_time.map_or(true, |best| seconds < best);
        if new_best {
            self.best_time = Some(seconds);
        }
        self.events.push(MemoryEvent::Won {
            seconds,
            moves: self.moves,
            new_best,
        });
        info!(seconds, moves = self.moves, new_best, "memory game won");
    }

    fn expire(&mut self) {
        // The board freezes as it is, including a pending pair.
        self.timeline.cancel_all();
        self.stopwatch = None;
        self.countdown = None;
        self.resolution = None;
        self.events.push(MemoryEvent::Expired);
        info!(moves = self.moves, matched = self.matched_pairs(), "memory game expired");
    }

    fn cancel_ticks(&mut self) {
        if let Some(handle) = self.stopwatch.take() {
            self.timeline.cancel(handle);
        }
        if let Some(handle) = self.countdown.take() {
            self.timeline.cancel(handle);
        }
    }
}

impl Clocked for MemoryGame {
    fn advance(&mut self, by: Duration) {
        let until = self.timeline.now() + by;
        while let Some(task) = self.timeline.pop_due(until) {
            self.handle(task);
        }
        self.timeline.settle(until);
    }
}

/// Two copies of every symbol in uniformly random order.
fn deal(symbols: &[Symbol], rng: &mut StdRng) -> Vec<Tile> {
    let mut deck: Vec<Symbol> = symbols.iter().chain(symbols.iter()).cloned().collect();
    deck.shuffle(rng);
    deck.into_iter()
        .enumerate()
        .map(|(id, symbol)| Tile::new(id, symbol))
        .collect()
}
