//! # workdeck-core - Core Domain Types
//!
//! Foundation crate for workdeck. Provides the domain types shared by the
//! application and terminal layers, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### GitHub (`github`)
//! - [`GitHubLinkInfo`] - Linked repository metadata shown on the project card
//! - [`GitHubCommit`] - Latest commit on the linked repository
//!
//! ### Chat (`chat`)
//! - [`ChatMessage`] - A user-authored message as stored in the conversation
//! - [`ClientEvent`] - Outbound envelope sent to the agent session
//! - [`PUSH_TO_GITHUB_PROMPT`] - Instruction script sent by "Push to GitHub"
//!
//! ### Analytics (`analytics`)
//! - [`AnalyticsEvent`] - Named analytics events captured by the card
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use workdeck_core::prelude::*;
//! ```

pub mod analytics;
pub mod chat;
pub mod error;
pub mod github;
pub mod logging;
pub mod prelude;

pub use analytics::AnalyticsEvent;
pub use chat::{
    create_chat_message, iso_timestamp, ActionType, ChatMessage, ClientEvent, MessageArgs,
    PUSH_TO_GITHUB_PROMPT,
};
pub use error::{Error, Result, ResultExt};
pub use github::{short_sha, GitHubCommit, GitHubLinkInfo};
