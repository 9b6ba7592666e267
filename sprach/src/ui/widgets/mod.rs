//! TUI widgets for the Sprach app

pub mod board;
pub mod input;

pub use board::{symbol_label, BoardWidget};
pub use input::InputWidget;
