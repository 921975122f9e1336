//! Mouse click routing

use crate::input_key::Click;
use crate::message::Message;
use crate::state::AppState;

/// Map a click to a message using the regions recorded by the last render
pub fn handle_click(state: &AppState, click: Click) -> Option<Message> {
    let areas = &state.hit_areas;
    let hit = |rect: Option<crate::state::HitRect>| {
        rect.is_some_and(|r| r.contains(click.column, click.row))
    };

    if state.card.is_connect_modal_open() {
        // Close control and backdrop dismiss; other clicks inside are inert
        if hit(areas.connect_modal_close) {
            return Some(Message::CloseConnectModal);
        }
        return if hit(areas.connect_modal) {
            None
        } else {
            Some(Message::CloseConnectModal)
        };
    }

    if state.card.is_context_menu_open() {
        if hit(areas.context_menu) {
            let row = click.row.checked_sub(areas.menu_first_row)? as usize;
            return (row < state.menu_item_count()).then_some(Message::ContextMenuSelectIndex(row));
        }
        if hit(areas.trigger) {
            return Some(Message::ToggleContextMenu);
        }
        return Some(Message::CloseContextMenu);
    }

    if hit(areas.trigger) {
        Some(Message::ToggleContextMenu)
    } else if hit(areas.connect_button) && !state.props.connected {
        Some(Message::OpenConnectModal)
    } else {
        None
    }
}
