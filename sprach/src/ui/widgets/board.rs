//! Memory board widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use sprach_core::memory::{Symbol, Tile};

use crate::ui::theme::Theme;

/// Short label for a tile face: `/Apfel.svg` becomes `Apfel`.
pub fn symbol_label(symbol: &Symbol) -> &str {
    let name = symbol.as_str();
    let name = name.rsplit('/').next().unwrap_or(name);
    name.split('.').next().unwrap_or(name)
}

/// Grid of face-down, flipped and matched tiles.
pub struct BoardWidget<'a> {
    tiles: &'a [Tile],
    columns: usize,
    cursor: usize,
    mirrored: bool,
    theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(tiles: &'a [Tile], columns: usize, theme: &'a Theme) -> Self {
        Self {
            tiles,
            columns: columns.max(1),
            cursor: 0,
            mirrored: false,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Lay columns out right to left.
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.tiles.len().div_ceil(self.columns);
        if rows == 0 {
            return;
        }

        let row_areas =
            Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(vec![
                Constraint::Ratio(1, self.columns as u32);
                self.columns
            ])
            .split(*row_area);

            for col in 0..self.columns {
                let index = row * self.columns + col;
                let Some(tile) = self.tiles.get(index) else {
                    continue;
                };
                let cell = if self.mirrored {
                    cells[self.columns - 1 - col]
                } else {
                    cells[col]
                };

                let style = self.theme.tile_style(
                    tile.is_flipped,
                    tile.is_matched,
                    index == self.cursor,
                );
                let face = if tile.is_face_up() {
                    symbol_label(&tile.symbol).to_string()
                } else {
                    "?".to_string()
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(index == self.cursor));
                Paragraph::new(Line::styled(face, style).centered())
                    .block(block)
                    .render(cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_label() {
        assert_eq!(symbol_label(&Symbol::new("/Apfel.svg")), "Apfel");
        assert_eq!(symbol_label(&Symbol::new("Banane")), "Banane");
        assert_eq!(symbol_label(&Symbol::new("/img/Tomate.v2.svg")), "Tomate");
    }

    #[test]
    fn test_board_renders_hidden_and_face_up() {
        let theme = Theme::default();
        let mut tiles = vec![
            Tile::new(0, Symbol::new("/Apfel.svg")),
            Tile::new(1, Symbol::new("/Apfel.svg")),
        ];
        tiles[0].is_flipped = true;

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&tiles, 2, &theme).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Apfel"));
        assert!(text.contains('?'));
    }
}
