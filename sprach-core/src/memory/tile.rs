//! Tiles and their symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque asset identifier shown on a tile face (e.g. `/Apfel.svg`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(id: &str) -> Self {
        Symbol::new(id)
    }
}

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position of the tile in the dealt deck.
    pub id: usize,
    pub symbol: Symbol,
    pub is_flipped: bool,
    /// Permanent once set.
    pub is_matched: bool,
}

impl Tile {
    pub fn new(id: usize, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the symbol is currently visible.
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}
