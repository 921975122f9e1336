//! Message types for the application (TEA pattern)

use crate::github::LinkDetection;
use crate::input_key::{Click, InputKey};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse click from terminal
    Click(Click),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Project Card Messages
    // ─────────────────────────────────────────────────────────
    /// Ellipsis trigger selected
    ToggleContextMenu,
    /// Close the context menu (Esc, click outside, item chosen)
    CloseContextMenu,
    /// Move menu highlight up
    ContextMenuUp,
    /// Move menu highlight down
    ContextMenuDown,
    /// Activate the highlighted menu item
    ContextMenuSelect,
    /// Activate a menu item by row (mouse)
    ContextMenuSelectIndex(usize),
    /// Ask the agent to push and open a pull request
    PushToGitHub,
    /// Export the workspace archive
    DownloadWorkspace,

    // ─────────────────────────────────────────────────────────
    // Connect Modal Messages
    // ─────────────────────────────────────────────────────────
    OpenConnectModal,
    /// Modal close button, Esc, or a click on the backdrop
    CloseConnectModal,
    ConnectModalInput(char),
    ConnectModalBackspace,
    ConnectModalSubmit,

    // ─────────────────────────────────────────────────────────
    // GitHub Link Messages
    // ─────────────────────────────────────────────────────────
    /// Re-run link detection
    RefreshGitHubLink,
    /// Link detection finished
    GitHubLinkDetected(LinkDetection),
    /// Link detection could not run
    GitHubLinkDetectionFailed { reason: String },
}
