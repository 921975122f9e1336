//! Project menu card: local state, actions, and the view model it renders.
//!
//! The card owns two independent flags, context menu and connect modal.
//! Its actions talk only to the collaborators passed in through
//! [`Services`].

use std::path::PathBuf;

use tracing::{debug, error, warn};
use workdeck_core::{
    AnalyticsEvent, ChatMessage, ClientEvent, GitHubCommit, GitHubLinkInfo, PUSH_TO_GITHUB_PROMPT,
};

use crate::context_menu::ContextMenuItem;
use crate::services::{Services, ToastKind};

/// Text of the notification shown when the workspace export fails
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download workspace.";

/// Inputs supplied by the owner of the card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProps {
    /// Workspace linked to a GitHub remote, whether or not `link` is loaded yet
    pub connected: bool,
    pub link: Option<GitHubLinkInfo>,
}

/// Body of the card: exactly one of these is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardDetails<'a> {
    Linked {
        repo_name: &'a str,
        avatar: &'a str,
        last_commit: &'a GitHubCommit,
    },
    Placeholder {
        connected: bool,
    },
}

/// Context menu overlay as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuView {
    pub connected: bool,
    pub items: Vec<ContextMenuItem>,
    pub selected: usize,
}

/// Everything the view needs to draw the card for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub context_menu: Option<ContextMenuView>,
    pub details: CardDetails<'a>,
    pub connect_modal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMenuCard {
    context_menu_open: bool,
    connect_modal_open: bool,
    menu_selected: usize,
}

impl ProjectMenuCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu_open
    }

    pub fn is_connect_modal_open(&self) -> bool {
        self.connect_modal_open
    }

    // ─────────────────────────────────────────────────────────
    // Flags
    // ─────────────────────────────────────────────────────────

    pub fn toggle_context_menu(&mut self) {
        self.context_menu_open = !self.context_menu_open;
        if self.context_menu_open {
            self.menu_selected = 0;
        }
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu_open = false;
    }

    pub fn open_connect_modal(&mut self) {
        self.connect_modal_open = true;
    }

    pub fn close_connect_modal(&mut self) {
        self.connect_modal_open = false;
    }

    // ─────────────────────────────────────────────────────────
    // Menu navigation
    // ─────────────────────────────────────────────────────────

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    pub fn select_next(&mut self, item_count: usize) {
        if item_count > 0 {
            self.menu_selected = (self.menu_selected + 1) % item_count;
        }
    }

    pub fn select_previous(&mut self, item_count: usize) {
        if item_count > 0 {
            self.menu_selected = (self.menu_selected + item_count - 1) % item_count;
        }
    }

    /// Select a row directly (mouse). Out-of-range rows are ignored.
    pub fn select_index(&mut self, index: usize, item_count: usize) {
        if index < item_count {
            self.menu_selected = index;
        }
    }

    /// Highlighted item for the current connection state
    pub fn selected_item(&self, connected: bool) -> Option<ContextMenuItem> {
        ContextMenuItem::for_connection(connected)
            .get(self.menu_selected)
            .copied()
    }

    // ─────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────

    /// Ask the agent to push the workspace and open a pull request.
    ///
    /// Sends the event, then records the same message in the conversation,
    /// then closes the context menu.
    pub fn push_to_github(&mut self, services: &Services) -> ChatMessage {
        services
            .analytics
            .capture(AnalyticsEvent::PushToGitHubClicked);

        let message = ChatMessage::user_now(PUSH_TO_GITHUB_PROMPT);
        let event = ClientEvent::from(&message);

        services.transport.send(&event);
        services.conversation.add_user_message(message.clone());
        self.close_context_menu();

        debug!("Push to GitHub requested at {}", message.timestamp);
        message
    }

    /// Export the workspace. Returns the archive path on success.
    ///
    /// Failures surface as a single fixed notification; the cause goes to
    /// the log only.
    pub fn download_workspace(&self, services: &Services) -> Option<PathBuf> {
        services
            .analytics
            .capture(AnalyticsEvent::DownloadWorkspaceClicked);

        match services.exporter.download_workspace() {
            Ok(path) => Some(path),
            Err(err) => {
                if err.is_recoverable() {
                    warn!("Workspace download failed: {}", err);
                } else {
                    error!("Workspace download failed: {}", err);
                }
                services
                    .notifier
                    .notify(ToastKind::Error, DOWNLOAD_FAILED_MESSAGE);
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // View model
    // ─────────────────────────────────────────────────────────

    pub fn view<'a>(&self, props: &'a CardProps) -> CardView<'a> {
        let context_menu = self.context_menu_open.then(|| ContextMenuView {
            connected: props.connected,
            items: ContextMenuItem::for_connection(props.connected),
            selected: self.menu_selected,
        });

        let details = match &props.link {
            Some(link) => CardDetails::Linked {
                repo_name: link.repo_name(),
                avatar: link.avatar(),
                last_commit: link.last_commit(),
            },
            None => CardDetails::Placeholder {
                connected: props.connected,
            },
        };

        CardView {
            context_menu,
            details,
            connect_modal: self.connect_modal_open,
        }
    }
}
