//! UI module for the Sprach TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
