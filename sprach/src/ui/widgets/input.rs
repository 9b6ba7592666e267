//! Form field widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Character shown in place of each secret character.
const MASK: char = '•';

/// A labelled single-line text field
pub struct InputWidget<'a> {
    label: &'a str,
    content: &'a str,
    theme: &'a Theme,
    is_active: bool,
    is_secret: bool,
    alignment: Alignment,
}

impl<'a> InputWidget<'a> {
    pub fn new(label: &'a str, content: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            content,
            theme,
            is_active: false,
            is_secret: false,
            alignment: Alignment::Left,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn secret(mut self, secret: bool) -> Self {
        self.is_secret = secret;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn display_text(&self) -> String {
        if self.is_secret {
            self.content.chars().map(|_| MASK).collect()
        } else {
            self.content.to_string()
        }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_alignment(self.alignment)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.is_active));

        let mut spans = vec![Span::styled(self.display_text(), self.theme.text_style())];
        if self.is_active {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::UNDERLINED | Modifier::REVERSED),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(self.alignment)
            .block(block)
            .render(area, buf);
    }
}
