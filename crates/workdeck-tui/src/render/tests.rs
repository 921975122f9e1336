//! Full-frame rendering tests for `view`

use super::*;
use crate::test_utils::{create_test_state, test_link, TestTerminal};
use workdeck_app::services::ToastKind;
use workdeck_core::ChatMessage;

fn render(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_frame_shows_placeholder() {
    let mut state = create_test_state();
    let term = render(&mut state);

    assert!(term.buffer_contains("workdeck"));
    assert!(term.buffer_contains("demo-app"));
    assert!(term.buffer_contains("Not connected to GitHub"));
    assert!(term.buffer_contains("No messages yet"));
}

#[test]
fn test_hit_areas_recorded() {
    let mut state = create_test_state();
    render(&mut state);

    assert!(state.hit_areas.trigger.is_some());
    assert!(state.hit_areas.connect_button.is_some());
    assert!(state.hit_areas.context_menu.is_none());
    assert!(state.hit_areas.connect_modal.is_none());
}

#[test]
fn test_linked_frame_has_no_connect_button() {
    let mut state = create_test_state();
    state.props.connected = true;
    state.props.link = Some(test_link());

    let term = render(&mut state);

    assert!(term.buffer_contains("octocat/hello-world"));
    assert!(!term.buffer_contains("Not connected to GitHub"));
    assert!(state.hit_areas.connect_button.is_none());
}

#[test]
fn test_open_menu_renders_items_under_trigger() {
    let mut state = create_test_state();
    state.card.toggle_context_menu();

    let term = render(&mut state);

    let menu = state.hit_areas.context_menu.expect("menu area recorded");
    let trigger = state.hit_areas.trigger.expect("trigger area recorded");
    assert_eq!(menu.y, trigger.y + 1);
    assert_eq!(state.hit_areas.menu_first_row, menu.y + 1);
    assert!(term.line_contains(menu.y + 1, "Connect to GitHub"));
    assert!(term.line_contains(menu.y + 2, "Download workspace"));
}

#[test]
fn test_modal_renders_over_card() {
    let mut state = create_test_state();
    state.card.open_connect_modal();

    let term = render(&mut state);

    assert!(state.hit_areas.connect_modal.is_some());
    let close = state.hit_areas.connect_modal_close.expect("close control recorded");
    assert!(state.hit_areas.connect_modal.unwrap().contains(close.x, close.y));
    assert!(term.buffer_contains("Paste a GitHub personal access token."));
}

#[test]
fn test_toasts_and_conversation_rendered() {
    let mut state = create_test_state();
    state
        .toasts
        .push(ToastKind::Error, "Failed to download workspace.");
    workdeck_app::services::ConversationStore::add_user_message(
        &state.conversation,
        ChatMessage::new("hello agent", Vec::new(), "2024-03-01T12:00:00.000Z".to_string()),
    );

    let term = render(&mut state);

    assert!(term.buffer_contains("Failed to download workspace."));
    assert!(term.buffer_contains("hello agent"));
}
