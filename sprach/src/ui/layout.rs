//! Screen layout calculations

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the main window
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let [title_area, body_area, status_bar, hotkey_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            title_area,
            body_area,
            status_bar,
            hotkey_bar,
        }
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.body_area.height, 19);
        assert_eq!(layout.hotkey_bar.y, 23);
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, area), area);
    }
}
