//! Color theme and styling for the Sprach TUI

use ratatui::style::{Color, Modifier, Style};

/// App color theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,

    // Memory board
    pub tile_hidden: Color,
    pub tile_flipped: Color,
    pub tile_matched: Color,

    // Feedback
    pub correct: Color,
    pub wrong: Color,
    pub warning: Color,
    pub system_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            accent: Color::LightBlue,

            tile_hidden: Color::Blue,
            tile_flipped: Color::Yellow,
            tile_matched: Color::Green,

            correct: Color::Green,
            wrong: Color::Red,
            warning: Color::LightRed,
            system_text: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Style of a memory tile. Matched wins over flipped.
    pub fn tile_style(&self, flipped: bool, matched: bool, under_cursor: bool) -> Style {
        let color = if matched {
            self.tile_matched
        } else if flipped {
            self.tile_flipped
        } else {
            self.tile_hidden
        };
        let style = Style::default().fg(color);
        if under_cursor {
            style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn feedback_style(&self, correct: bool) -> Style {
        Style::default()
            .fg(if correct { self.correct } else { self.wrong })
            .add_modifier(Modifier::BOLD)
    }

    /// Countdown color, red for the last ten seconds.
    pub fn countdown_style(&self, seconds: u32) -> Style {
        if seconds <= 10 {
            Style::default()
                .fg(self.warning)
                .add_modifier(Modifier::BOLD)
        } else {
            self.text_style()
        }
    }

    pub fn selection_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            self.text_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_style_priority() {
        let theme = Theme::default();
        assert_eq!(
            theme.tile_style(true, true, false).fg,
            Some(theme.tile_matched)
        );
        assert_eq!(
            theme.tile_style(true, false, false).fg,
            Some(theme.tile_flipped)
        );
        assert_eq!(
            theme.tile_style(false, false, false).fg,
            Some(theme.tile_hidden)
        );
    }

    #[test]
    fn test_countdown_warning() {
        let theme = Theme::default();
        assert_eq!(theme.countdown_style(10).fg, Some(theme.warning));
        assert_eq!(theme.countdown_style(11).fg, Some(theme.foreground));
    }
}
