//! Project card context menu items

use crate::message::Message;

/// Action listed in the card's context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuItem {
    ConnectToGitHub,
    PushToGitHub,
    DownloadWorkspace,
}

impl ContextMenuItem {
    /// Items offered for the current connection state.
    ///
    /// Connecting is only offered when not connected, pushing only when
    /// connected. Download is always available.
    pub fn for_connection(connected: bool) -> Vec<ContextMenuItem> {
        if connected {
            vec![
                ContextMenuItem::PushToGitHub,
                ContextMenuItem::DownloadWorkspace,
            ]
        } else {
            vec![
                ContextMenuItem::ConnectToGitHub,
                ContextMenuItem::DownloadWorkspace,
            ]
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContextMenuItem::ConnectToGitHub => "Connect to GitHub",
            ContextMenuItem::PushToGitHub => "Push to GitHub",
            ContextMenuItem::DownloadWorkspace => "Download workspace",
        }
    }

    /// Message dispatched when the item is chosen
    pub fn message(&self) -> Message {
        match self {
            ContextMenuItem::ConnectToGitHub => Message::OpenConnectModal,
            ContextMenuItem::PushToGitHub => Message::PushToGitHub,
            ContextMenuItem::DownloadWorkspace => Message::DownloadWorkspace,
        }
    }
}
