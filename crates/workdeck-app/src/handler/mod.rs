//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per overlay
//! - `mouse`: Click hit-testing against the last frame's regions

pub(crate) mod keys;
pub(crate) mod mouse;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;
#[cfg(test)]
pub(crate) use mouse::handle_click;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Inspect the workspace's git remote and last commit in the background
    DetectGitHubLink { workspace: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
