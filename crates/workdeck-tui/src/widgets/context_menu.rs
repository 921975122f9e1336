//! Context menu popup listing the card's actions

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use workdeck_app::ContextMenuView;

use crate::theme::{icons::IconSet, palette, styles};

use super::modal_overlay;

pub struct ContextMenu<'a> {
    view: &'a ContextMenuView,
    icons: IconSet,
}

impl<'a> ContextMenu<'a> {
    pub fn new(view: &'a ContextMenuView, icons: IconSet) -> Self {
        Self { view, icons }
    }
}

impl Widget for ContextMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::prepare_popup(buf, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, item) in self.view.items.iter().enumerate() {
            let y = inner.y.saturating_add(row as u16);
            if y >= inner.bottom() {
                break;
            }

            let style = if row == self.view.selected {
                styles::focused_selected()
            } else {
                styles::text_primary().bg(palette::POPUP_BG)
            };
            let line = Line::from(vec![
                Span::raw(" "),
                Span::raw(self.icons.menu_item(*item)),
                Span::raw(" "),
                Span::raw(item.label()),
            ])
            .style(style);

            let row_area = Rect::new(inner.x, y, inner.width, 1);
            buf.set_style(row_area, style);
            line.render(row_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use workdeck_app::config::IconMode;
    use workdeck_app::ContextMenuItem;

    fn view(connected: bool, selected: usize) -> ContextMenuView {
        ContextMenuView {
            connected,
            items: ContextMenuItem::for_connection(connected),
            selected,
        }
    }

    #[test]
    fn test_disconnected_menu_items() {
        let mut term = TestTerminal::with_size(26, 4);
        let view = view(false, 0);

        term.render_widget(
            ContextMenu::new(&view, IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 25, 4),
        );

        assert!(term.line_contains(1, "Connect to GitHub"));
        assert!(term.line_contains(2, "Download workspace"));
        assert!(!term.buffer_contains("Push to GitHub"));
    }

    #[test]
    fn test_connected_menu_items() {
        let mut term = TestTerminal::with_size(26, 4);
        let view = view(true, 0);

        term.render_widget(
            ContextMenu::new(&view, IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 25, 4),
        );

        assert!(term.line_contains(1, "Push to GitHub"));
        assert!(!term.buffer_contains("Connect to GitHub"));
    }

    #[test]
    fn test_selected_row_highlighted() {
        let mut term = TestTerminal::with_size(26, 4);
        let view = view(false, 1);

        term.render_widget(
            ContextMenu::new(&view, IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 25, 4),
        );

        let buf = term.buffer();
        assert_eq!(buf[(3, 2)].bg, palette::ACCENT);
        assert_ne!(buf[(3, 1)].bg, palette::ACCENT);
    }
}
