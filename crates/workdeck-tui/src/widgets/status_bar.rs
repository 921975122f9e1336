//! Status bar widget
//!
//! Connection state, link detection progress, session target and the last
//! exported archive.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use workdeck_app::state::{AppState, LinkStatus};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn connection(&self) -> Span<'static> {
        let (dot, label, style) = styles::connection_indicator(self.state.props.connected);
        Span::styled(format!("{} {}", dot, label), style)
    }

    fn link_status(&self) -> Span<'a> {
        match &self.state.link_status {
            LinkStatus::Detecting => Span::styled("detecting remote…", styles::text_muted()),
            LinkStatus::Ready => match &self.state.props.link {
                Some(link) => Span::styled(link.repo_name(), styles::text_secondary()),
                None => Span::styled("no GitHub remote", styles::text_muted()),
            },
            LinkStatus::Failed(_) => Span::styled("remote unavailable", styles::error_text()),
        }
    }

    fn session(&self) -> Span<'a> {
        match self.state.settings.session.url.as_deref() {
            Some(url) => Span::styled(url, styles::text_secondary()),
            None => Span::styled("offline", styles::text_muted()),
        }
    }

    fn last_download(&self) -> Option<Span<'static>> {
        self.state.last_download.as_ref().map(|path| {
            Span::styled(
                format!("saved {}", path.display()),
                Style::default().fg(palette::STATUS_GREEN),
            )
        })
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = || Span::styled(" │ ", styles::text_muted());

        let mut spans = vec![
            Span::raw(" "),
            self.connection(),
            separator(),
            self.link_status(),
            separator(),
            self.session(),
        ];
        if let Some(saved) = self.last_download() {
            spans.push(separator());
            spans.push(saved);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, test_link, TestTerminal};
    use std::path::PathBuf;

    #[test]
    fn test_initial_status() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(80, 1);

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Not connected"));
        assert!(term.buffer_contains("detecting remote"));
        assert!(term.buffer_contains("offline"));
    }

    #[test]
    fn test_linked_status_and_download() {
        let mut state = create_test_state();
        state.props.connected = true;
        state.props.link = Some(test_link());
        state.link_status = LinkStatus::Ready;
        state.last_download = Some(PathBuf::from("/tmp/workspace.tar.gz"));

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Connected"));
        assert!(term.buffer_contains("octocat/hello-world"));
        assert!(term.buffer_contains("saved /tmp/workspace.tar.gz"));
    }

    #[test]
    fn test_failed_detection() {
        let mut state = create_test_state();
        state.link_status = LinkStatus::Failed("git missing".to_string());

        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("remote unavailable"));
    }
}
