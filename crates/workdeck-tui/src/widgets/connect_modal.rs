//! Connect-to-GitHub modal: token field over a dimmed backdrop

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use workdeck_app::connect_modal::ConnectModalState;

use crate::layout::{modal_close_rect, MODAL_CLOSE_LABEL};
use crate::theme::{icons::IconSet, palette, styles};

use super::modal_overlay;

pub struct ConnectModal<'a> {
    form: &'a ConnectModalState,
    icons: IconSet,
}

impl<'a> ConnectModal<'a> {
    pub fn new(form: &'a ConnectModalState, icons: IconSet) -> Self {
        Self { form, icons }
    }
}

impl ConnectModal<'_> {
    /// Render into `modal` after dimming everything in `screen`
    pub fn render_over(self, screen: Rect, modal: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, screen);
        self.render(modal, buf);
    }
}

impl Widget for ConnectModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::prepare_popup(buf, area);

        let block = styles::modal_block(" Connect to GitHub ");
        let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
        block.render(area, buf);

        let close = modal_close_rect(area);
        buf.set_stringn(
            close.x,
            close.y,
            MODAL_CLOSE_LABEL,
            usize::from(close.width),
            styles::accent(),
        );

        let [intro, _, field, error, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(
            "Paste a GitHub personal access token.",
            styles::text_secondary(),
        ))
        .render(intro, buf);

        let masked = self.form.masked();
        let field_block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_active())
            .title(Line::from(vec![
                Span::raw(" "),
                Span::raw(self.icons.lock()),
                Span::raw(" Token "),
            ]));
        Paragraph::new(Line::from(vec![
            Span::styled(masked, styles::text_primary()),
            Span::styled("▏", styles::accent()),
        ]))
        .block(field_block)
        .style(Style::default().bg(palette::POPUP_BG))
        .render(field, buf);

        if let Some(message) = self.form.error() {
            Paragraph::new(Line::from(vec![
                Span::styled(self.icons.alert(), styles::error_text()),
                Span::raw(" "),
                Span::styled(message, styles::error_text()),
            ]))
            .render(error, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" connect  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]))
        .render(hints, buf);
    }
}
