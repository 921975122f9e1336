//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::github::detect_github_link;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::DetectGitHubLink { workspace } => {
            spawn_link_detection(workspace, msg_tx);
        }
    }
}

/// Run `git` off the event loop and report the result as a message
fn spawn_link_detection(workspace: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || detect_github_link(&workspace)).await;

        let msg = match result {
            Ok(Ok(detection)) => {
                debug!(
                    "GitHub link detection: connected={}, linked={}",
                    detection.connected,
                    detection.link.is_some()
                );
                Message::GitHubLinkDetected(detection)
            }
            Ok(Err(e)) => Message::GitHubLinkDetectionFailed {
                reason: e.to_string(),
            },
            Err(e) => Message::GitHubLinkDetectionFailed {
                reason: format!("Link detection task failed: {}", e),
            },
        };

        if msg_tx.send(msg).await.is_err() {
            warn!("Message channel closed before link detection finished");
        }
    });
}
