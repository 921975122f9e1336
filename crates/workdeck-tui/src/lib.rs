//! workdeck-tui - Terminal UI for workdeck
//!
//! This crate provides the ratatui-based terminal interface. It wires the
//! service layer from workdeck-app to a live terminal and renders the project
//! card, its overlays, the conversation and toasts.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::{run_with_workspace, RunOptions};
