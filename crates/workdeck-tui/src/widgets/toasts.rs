//! Toast stack drawn over the top-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use workdeck_app::services::Toast;

use crate::theme::{icons::IconSet, styles};

use super::modal_overlay;

/// Rows taken by one toast (border, text, border)
pub const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack<'a> {
    toasts: &'a [Toast],
    icons: IconSet,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast], icons: IconSet) -> Self {
        Self { toasts, icons }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, toast) in self.toasts.iter().enumerate() {
            let y = area.y.saturating_add(i as u16 * TOAST_HEIGHT);
            if y.saturating_add(TOAST_HEIGHT) > area.bottom() {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, TOAST_HEIGHT);
            let style = styles::toast(toast.kind);

            modal_overlay::prepare_popup(buf, rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(style);
            Paragraph::new(Line::from(vec![
                Span::styled(self.icons.toast(toast.kind), style),
                Span::raw(" "),
                Span::styled(toast.text.as_str(), styles::text_primary()),
            ]))
            .block(block)
            .render(rect, buf);
        }
    }
}
