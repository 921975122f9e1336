//! Card body: repository details, or a placeholder when no link info is loaded

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use workdeck_core::GitHubCommit;

use crate::layout::CONNECT_BUTTON_LABEL;
use crate::theme::{icons::IconSet, palette, styles};

/// Repository name, avatar and last commit
pub struct RepoDetails<'a> {
    repo_name: &'a str,
    avatar: &'a str,
    last_commit: &'a GitHubCommit,
    icons: IconSet,
}

impl<'a> RepoDetails<'a> {
    pub fn new(
        repo_name: &'a str,
        avatar: &'a str,
        last_commit: &'a GitHubCommit,
        icons: IconSet,
    ) -> Self {
        Self {
            repo_name,
            avatar,
            last_commit,
            icons,
        }
    }
}

impl Widget for RepoDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let commit = self.last_commit;
        let when = commit.timestamp.format("%Y-%m-%d %H:%M UTC").to_string();
        let sha = commit.short_sha();

        // icon, sha and two separators share the row with the summary
        let prefix = self.icons.commit().width() + sha.width() + 2;
        let summary = truncate_to_width(
            commit.summary(),
            usize::from(area.width).saturating_sub(prefix),
        );

        let lines = vec![
            Line::from(vec![
                Span::styled(self.icons.github(), styles::accent()),
                Span::raw(" "),
                Span::styled(self.repo_name, styles::accent_bold()),
            ]),
            Line::from(vec![
                Span::styled(self.icons.user(), styles::text_muted()),
                Span::raw(" "),
                Span::styled(self.avatar, styles::text_muted()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled(self.icons.commit(), styles::text_secondary()),
                Span::raw(" "),
                Span::styled(sha, Style::default().fg(palette::COMMIT_SHA)),
                Span::raw(" "),
                Span::styled(summary, styles::text_primary()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", commit.author, when),
                    styles::text_muted(),
                ),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

/// Cut `text` to at most `max` terminal cells, ending in an ellipsis when cut
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Shown when link info is absent. Offers the connect button only when the
/// workspace is not connected.
pub struct DetailsPlaceholder {
    connected: bool,
    icons: IconSet,
}

impl DetailsPlaceholder {
    pub fn new(connected: bool, icons: IconSet) -> Self {
        Self { connected, icons }
    }
}

impl Widget for DetailsPlaceholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (dot, label, status_style) = styles::connection_indicator(self.connected);

        let mut lines = vec![Line::from(vec![
            Span::styled(dot, status_style),
            Span::raw(" "),
            Span::styled(format!("{} to GitHub", label), status_style),
        ])];

        if self.connected {
            lines.push(Line::styled(
                "Repository details will appear after the first commit.",
                styles::text_muted(),
            ));
        } else {
            lines.push(Line::styled(
                "Connect a GitHub account to push changes and open pull requests.",
                styles::text_secondary(),
            ));
            lines.push(Line::from(vec![
                Span::styled(CONNECT_BUTTON_LABEL, styles::focused_selected()),
                Span::raw("  "),
                Span::styled(self.icons.link(), styles::text_muted()),
                Span::styled(" or press ", styles::text_muted()),
                Span::styled(
                    "c",
                    styles::keybinding().add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
