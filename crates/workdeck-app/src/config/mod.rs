//! Configuration file parsing for workdeck
//!
//! Supports:
//! - `.workdeck/config.toml` - Session, export, UI and analytics settings

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, resolve_download_dir, save_settings};
pub use types::*;
