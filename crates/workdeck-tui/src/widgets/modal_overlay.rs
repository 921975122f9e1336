//! Popup and modal helpers shared by the context menu and connect modal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area's size.
///
/// ```
/// use ratatui::layout::Rect;
/// use workdeck_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Restyle every cell in `area` as the modal backdrop
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_style(dim);
        }
    }
}

/// One-cell drop shadow along the right and bottom edges of `rect`
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = rect.x.saturating_add(rect.width);
    let bottom = rect.y.saturating_add(rect.height);

    let column = (rect.y.saturating_add(1)..=bottom).map(|y| (right, y));
    let row = (rect.x.saturating_add(1)..=right).map(|x| (x, bottom));
    for pos in column.chain(row) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}

/// Clear `rect` and draw its shadow, ready for popup content
pub fn prepare_popup(buf: &mut Buffer, rect: Rect) {
    render_shadow(buf, rect);
    Clear.render(rect, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_and_offsets() {
        assert_eq!(
            centered_rect(40, 10, Rect::new(0, 0, 30, 8)),
            Rect::new(0, 0, 30, 8)
        );
        assert_eq!(
            centered_rect(40, 10, Rect::new(10, 5, 80, 24)),
            Rect::new(30, 12, 40, 10)
        );
    }

    #[test]
    fn test_dim_background_only_touches_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, Rect::new(5, 3, 10, 5));

        assert_eq!(buf[(5, 3)].bg, palette::DEEPEST_BG);
        assert_eq!(buf[(14, 7)].fg, palette::TEXT_MUTED);
        assert_eq!(buf[(4, 3)].fg, ratatui::style::Color::Reset);
    }

    #[test]
    fn test_dim_background_larger_than_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        dim_background(&mut buf, Rect::new(2, 2, 10, 10));
        assert_eq!(buf[(3, 3)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_shadow_right_and_bottom() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6));

        assert_eq!(buf[(15, 3)].bg, palette::SHADOW);
        assert_eq!(buf[(6, 8)].bg, palette::SHADOW);
        // Top-right corner stays uncovered
        assert_ne!(buf[(15, 2)].bg, palette::SHADOW);
    }

    #[test]
    fn test_shadow_at_buffer_edge_does_not_panic() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2));
    }

    #[test]
    fn test_prepare_popup_clears_content() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        buf.set_string(0, 1, "XXXXXXXXXX", Style::default());

        prepare_popup(&mut buf, Rect::new(2, 1, 4, 2));

        assert_eq!(buf[(3, 1)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), "X");
    }
}
