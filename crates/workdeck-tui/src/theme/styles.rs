//! Semantic style builders for the workdeck theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use workdeck_app::services::ToastKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the highlighted menu row and buttons
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Toasts ---

/// Border and text style for a toast of the given kind
pub fn toast(kind: ToastKind) -> Style {
    let color = match kind {
        ToastKind::Error => palette::STATUS_RED,
        ToastKind::Success => palette::STATUS_GREEN,
        ToastKind::Info => palette::STATUS_BLUE,
    };
    Style::default().fg(color).bg(palette::POPUP_BG)
}

/// Connection indicator: `(dot, label, style)`
pub fn connection_indicator(connected: bool) -> (&'static str, &'static str, Style) {
    if connected {
        (
            "●",
            "Connected",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("○", "Not connected", Style::default().fg(palette::TEXT_MUTED))
    }
}
