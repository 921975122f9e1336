//! workdeck-app - Application state and orchestration for workdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! project menu card: state, messages, the update function, the service
//! traits the card talks to, configuration loading and GitHub link detection.

pub mod actions;
pub mod card;
pub mod config;
pub mod connect_modal;
pub mod context_menu;
pub mod github;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod services;
pub mod signals;
pub mod state;

// Re-export primary types
pub use card::{CardDetails, CardProps, CardView, ContextMenuView, ProjectMenuCard};
pub use context_menu::ContextMenuItem;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::{Click, InputKey};
pub use message::Message;
pub use services::Services;
pub use state::AppState;
