//! Project menu card: bordered panel with the ellipsis trigger and either
//! repository details or the placeholder.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use workdeck_app::CardDetails;

use crate::layout;
use crate::theme::{icons::IconSet, palette, styles};

use super::card_details::{DetailsPlaceholder, RepoDetails};

pub struct ProjectCard<'a> {
    project_name: Option<&'a str>,
    details: &'a CardDetails<'a>,
    menu_open: bool,
    icons: IconSet,
}

impl<'a> ProjectCard<'a> {
    pub fn new(details: &'a CardDetails<'a>, icons: IconSet) -> Self {
        Self {
            project_name: None,
            details,
            menu_open: false,
            icons,
        }
    }

    pub fn project_name(mut self, name: Option<&'a str>) -> Self {
        self.project_name = name;
        self
    }

    /// Highlight the border and trigger while the menu is showing
    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }
}

impl Widget for ProjectCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.terminal(), styles::accent()),
            Span::raw(" "),
            Span::styled(
                self.project_name.unwrap_or("workspace"),
                styles::text_primary(),
            ),
            Span::raw(" "),
        ]);
        let block = styles::glass_block(self.menu_open)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));
        block.render(area, buf);

        let trigger = layout::trigger_rect(area);
        if trigger.width >= 3 {
            let style = if self.menu_open {
                styles::focused_selected()
            } else {
                styles::accent()
            };
            buf.set_string(
                trigger.x,
                trigger.y,
                format!(" {} ", self.icons.ellipsis()),
                style,
            );
        }

        let inner = layout::card_inner(area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match *self.details {
            CardDetails::Linked {
                repo_name,
                avatar,
                last_commit,
            } => RepoDetails::new(repo_name, avatar, last_commit, self.icons).render(inner, buf),
            CardDetails::Placeholder { connected } => {
                DetailsPlaceholder::new(connected, self.icons).render(inner, buf)
            }
        }
    }
}
