//! Header bar with app title, project name and key hints

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct MainHeader<'a> {
    project_name: Option<&'a str>,
    connected: bool,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(project_name: Option<&'a str>, icons: IconSet) -> Self {
        Self {
            project_name,
            connected: false,
            icons,
        }
    }

    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    fn shortcuts(&self) -> Line<'static> {
        let mut spans = Vec::new();
        let mut hint = |key: &'static str, label: &'static str| {
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        };
        hint("m", "Menu");
        if !self.connected {
            hint("c", "Connect");
        }
        hint("r", "Refresh");
        hint("q", "Quit");
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, _, dot_style) = styles::connection_indicator(self.connected);
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled("workdeck", styles::accent_bold()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(
                self.project_name.unwrap_or("workspace"),
                styles::text_primary(),
            ),
            Span::raw(" "),
            Span::styled(self.icons.terminal(), styles::text_muted()),
        ]);

        let shortcuts = self.shortcuts();
        let hints_width = (shortcuts.width() as u16).min(inner.width);
        let [title_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(inner);

        Paragraph::new(title).render(title_area, buf);
        Paragraph::new(shortcuts).render(hints_area, buf);
    }
}
