//! Key event handlers for the card and its overlays

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on which overlay is on top
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.card.is_connect_modal_open() {
        handle_key_connect_modal(key)
    } else if state.card.is_context_menu_open() {
        handle_key_context_menu(key)
    } else {
        handle_key_normal(state, key)
    }
}

/// Connect modal captures all printable input for the token field
fn handle_key_connect_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CloseConnectModal),
        InputKey::Enter => Some(Message::ConnectModalSubmit),
        InputKey::Backspace => Some(Message::ConnectModalBackspace),
        InputKey::Char(c) => Some(Message::ConnectModalInput(c)),
        _ => None,
    }
}

fn handle_key_context_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CloseContextMenu),
        InputKey::Char('m' | '.') => Some(Message::ToggleContextMenu),
        InputKey::Up | InputKey::Char('k') => Some(Message::ContextMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ContextMenuDown),
        InputKey::Enter => Some(Message::ContextMenuSelect),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('m' | '.') => Some(Message::ToggleContextMenu),
        // Connect affordance of the placeholder
        InputKey::Char('c') if !state.props.connected => Some(Message::OpenConnectModal),
        InputKey::Char('r') => Some(Message::RefreshGitHubLink),
        _ => None,
    }
}
