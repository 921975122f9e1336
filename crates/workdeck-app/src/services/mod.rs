//! Service layer for workdeck
//!
//! The project card never reaches for global state. Everything it talks to
//! is one of the traits below, bundled into [`Services`] and passed in
//! explicitly by the caller.
//!
//! ## Architecture
//!
//! ```text
//!            ┌──────────────────┐
//!            │ ProjectMenuCard  │
//!            └────────┬─────────┘
//!                     │ &Services
//!   ┌─────────┬───────┼──────────┬────────────┐
//!   ▼         ▼       ▼          ▼            ▼
//! Transport Convers. Notifier  Analytics  WorkspaceExporter
//!   │         │       │          │            │
//! session   shared   toast     tracing     tar.gz
//! writer    history  queue     events      archive
//! ```
//!
//! ## Key Components
//!
//! - [`ChannelTransport`]: Pushes outbound events to the session writer task
//! - [`SharedConversation`]: Conversation history shared with the view
//! - [`ToastQueue`]: Transient notifications, expired on tick
//! - [`TracingAnalytics`]: Analytics events as structured log records
//! - [`ArchiveExporter`]: Packages the workspace as a gzip tarball

mod analytics;
mod conversation;
mod toast;
mod transport;
mod workspace;

use std::path::PathBuf;
use std::sync::Arc;

use workdeck_core::{AnalyticsEvent, ChatMessage, ClientEvent, Result};

pub use analytics::TracingAnalytics;
pub use conversation::SharedConversation;
pub use toast::{Toast, ToastKind, ToastQueue, MAX_VISIBLE_TOASTS};
pub use transport::{
    compute_backoff, spawn_session_writer, ChannelTransport, MAX_PENDING_EVENTS,
    SESSION_CHANNEL_CAPACITY,
};
pub use workspace::ArchiveExporter;

/// Real-time link to the agent session. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn send(&self, event: &ClientEvent);
}

/// Conversation history shown to the user
#[cfg_attr(test, mockall::automock)]
pub trait ConversationStore: Send + Sync {
    fn add_user_message(&self, message: ChatMessage);
}

/// Transient user-facing notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, text: &str);
}

/// Fire-and-forget telemetry sink
#[cfg_attr(test, mockall::automock)]
pub trait Analytics: Send + Sync {
    fn capture(&self, event: AnalyticsEvent);
}

/// Packages the current workspace for download
#[cfg_attr(test, mockall::automock)]
pub trait WorkspaceExporter: Send + Sync {
    /// Returns the path of the written archive
    fn download_workspace(&self) -> Result<PathBuf>;
}

/// Collaborators injected into the project card
#[derive(Clone)]
pub struct Services {
    pub transport: Arc<dyn Transport>,
    pub conversation: Arc<dyn ConversationStore>,
    pub notifier: Arc<dyn Notifier>,
    pub analytics: Arc<dyn Analytics>,
    pub exporter: Arc<dyn WorkspaceExporter>,
}
