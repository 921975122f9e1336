//! Conversation history panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use workdeck_core::ChatMessage;

use crate::theme::{palette, styles};

/// Messages sent from this terminal, newest at the bottom.
///
/// Older lines scroll off the top when the panel is full.
pub struct ConversationView<'a> {
    messages: &'a [ChatMessage],
}

impl<'a> ConversationView<'a> {
    pub fn new(messages: &'a [ChatMessage]) -> Self {
        Self { messages }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for message in self.messages {
            lines.push(Line::from(vec![
                Span::styled("you", styles::accent_bold()),
                Span::styled(format!("  {}", message.timestamp), styles::text_muted()),
            ]));
            lines.extend(
                message
                    .content
                    .trim()
                    .lines()
                    .map(|l| Line::styled(l, styles::text_primary())),
            );
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for ConversationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Conversation ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.messages.is_empty() {
            Paragraph::new(Line::styled("No messages yet", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        // Lines are clipped, not wrapped, so one entry is one row
        let lines = self.lines();
        let scroll = (lines.len() as u16).saturating_sub(inner.height);
        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}
