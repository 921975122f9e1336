//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::services::{Services, ToastKind};
use crate::state::{AppPhase, AppState, LinkStatus};

use super::{keys::handle_key, mouse::handle_click, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message, services: &Services) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Click(click) => match handle_click(state, click) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let expired = state.toasts.expire(Instant::now(), state.toast_duration());
            if expired > 0 {
                debug!("Expired {} toast(s)", expired);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Project Card Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleContextMenu => {
            state.card.toggle_context_menu();
            UpdateResult::none()
        }

        Message::CloseContextMenu => {
            state.card.close_context_menu();
            UpdateResult::none()
        }

        Message::ContextMenuUp => {
            let count = state.menu_item_count();
            state.card.select_previous(count);
            UpdateResult::none()
        }

        Message::ContextMenuDown => {
            let count = state.menu_item_count();
            state.card.select_next(count);
            UpdateResult::none()
        }

        Message::ContextMenuSelectIndex(index) => {
            let count = state.menu_item_count();
            state.card.select_index(index, count);
            UpdateResult::message(Message::ContextMenuSelect)
        }

        Message::ContextMenuSelect => {
            if !state.card.is_context_menu_open() {
                return UpdateResult::none();
            }
            let item = state.card.selected_item(state.props.connected);
            state.card.close_context_menu();
            match item {
                Some(item) => UpdateResult::message(item.message()),
                None => UpdateResult::none(),
            }
        }

        Message::PushToGitHub => {
            state.card.push_to_github(services);
            UpdateResult::none()
        }

        Message::DownloadWorkspace => {
            if let Some(path) = state.card.download_workspace(services) {
                info!("Workspace exported to {}", path.display());
                state.last_download = Some(path);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Connect Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenConnectModal => {
            state.connect_form.reset();
            state.card.open_connect_modal();
            UpdateResult::none()
        }

        Message::CloseConnectModal => {
            state.connect_form.reset();
            state.card.close_connect_modal();
            UpdateResult::none()
        }

        Message::ConnectModalInput(c) => {
            if state.card.is_connect_modal_open() {
                state.connect_form.input_char(c);
            }
            UpdateResult::none()
        }

        Message::ConnectModalBackspace => {
            if state.card.is_connect_modal_open() {
                state.connect_form.backspace();
            }
            UpdateResult::none()
        }

        Message::ConnectModalSubmit => {
            if !state.card.is_connect_modal_open() {
                return UpdateResult::none();
            }
            match state.connect_form.submit() {
                Some(token) => {
                    state.github_token = Some(token);
                    state.props.connected = true;
                    state.card.close_connect_modal();
                    state.toasts.push(ToastKind::Success, "Connected to GitHub");
                    info!("GitHub token stored for this session");
                }
                None => debug!("Connect modal submitted without a token"),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // GitHub Link Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshGitHubLink => {
            state.link_status = LinkStatus::Detecting;
            UpdateResult::action(UpdateAction::DetectGitHubLink {
                workspace: state.workspace.clone(),
            })
        }

        Message::GitHubLinkDetected(detection) => {
            // A token entered in the modal keeps the card connected even
            // when the remote is not on GitHub
            state.props.connected = detection.connected || state.github_token.is_some();
            state.props.link = detection.link;
            state.link_status = LinkStatus::Ready;
            UpdateResult::none()
        }

        Message::GitHubLinkDetectionFailed { reason } => {
            warn!("GitHub link detection failed: {}", reason);
            state.link_status = LinkStatus::Failed(reason);
            UpdateResult::none()
        }
    }
}
