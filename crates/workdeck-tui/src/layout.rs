//! Screen layout definitions for the TUI
//!
//! Fixed header and card, conversation filling the rest, and a one-line
//! status bar. Overlay rects (menu, modal, toasts) are derived from these.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::widgets::modal_overlay::centered_rect;
use crate::widgets::TOAST_HEIGHT;

/// Card height: borders plus five content rows
pub const CARD_HEIGHT: u16 = 7;

/// Width of the context menu popup
pub const MENU_WIDTH: u16 = 26;

pub const MODAL_WIDTH: u16 = 56;
pub const MODAL_HEIGHT: u16 = 9;

pub const TOAST_WIDTH: u16 = 40;

/// Close control drawn on the connect modal's top border
pub const MODAL_CLOSE_LABEL: &str = "[x]";

/// Label of the placeholder's connect button
pub const CONNECT_BUTTON_LABEL: &str = " Connect to GitHub ";

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with project name and key hints
    pub header: Rect,
    /// Project menu card
    pub card: Rect,
    /// Conversation history
    pub conversation: Rect,
    /// Single-line status bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        card: chunks[1],
        conversation: chunks[2],
        status: chunks[3],
    }
}

/// Ellipsis trigger drawn on the card's top border, right-aligned
pub fn trigger_rect(card: Rect) -> Rect {
    let width = 3.min(card.width);
    let x = card
        .x
        .saturating_add(card.width.saturating_sub(width + 2))
        .max(card.x);
    Rect::new(x, card.y, width, 1.min(card.height))
}

/// Content area of the card inside its border and padding
pub fn card_inner(card: Rect) -> Rect {
    card.inner(Margin::new(2, 1))
}

/// Connect button on the third content row of the placeholder
pub fn connect_button_rect(card: Rect) -> Rect {
    let inner = card_inner(card);
    let width = (CONNECT_BUTTON_LABEL.len() as u16).min(inner.width);
    let height = u16::from(inner.height > 2);
    Rect::new(inner.x, inner.y.saturating_add(2), width, height)
}

/// Context menu popup anchored under the trigger, kept inside `bounds`
pub fn context_menu_rect(trigger: Rect, item_count: usize, bounds: Rect) -> Rect {
    let width = MENU_WIDTH.min(bounds.width);
    let height = (item_count as u16).saturating_add(2).min(bounds.height);

    let right = trigger.x.saturating_add(trigger.width).min(bounds.right());
    let x = right.saturating_sub(width).max(bounds.x);

    let below = trigger.y.saturating_add(1);
    let y = if below.saturating_add(height) <= bounds.bottom() {
        below
    } else {
        bounds.bottom().saturating_sub(height).max(bounds.y)
    };

    Rect::new(x, y, width, height)
}

pub fn connect_modal_rect(area: Rect) -> Rect {
    centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area)
}

/// Close control in the top-right corner of the modal border
pub fn modal_close_rect(modal: Rect) -> Rect {
    let width = (MODAL_CLOSE_LABEL.len() as u16).min(modal.width);
    let x = modal
        .x
        .saturating_add(modal.width.saturating_sub(width + 2))
        .max(modal.x);
    Rect::new(x, modal.y, width, 1.min(modal.height))
}

/// Toast stack in the top-right corner, newest at the bottom
pub fn toast_rect(area: Rect, count: usize) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = (count as u16).saturating_mul(TOAST_HEIGHT).min(area.height);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    let y = area.y.saturating_add(1).min(area.bottom().saturating_sub(height));
    Rect::new(x, y, width, height)
}
