//! workdeck library
//!
//! Entry points shared by the binary and integration tests. The real work
//! lives in the `workdeck-*` crates.

use std::path::{Path, PathBuf};

use workdeck_app::config;
use workdeck_core::prelude::*;

pub use workdeck_tui::RunOptions;

/// Main application entry point for a workspace
pub async fn run_with_workspace(workspace: &Path, options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    workdeck_core::logging::init()?;

    info!("Workspace: {}", workspace.display());

    let result = workdeck_tui::run_with_workspace(workspace, options).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("workdeck exiting");
    result
}

/// Write `.workdeck/config.toml` with defaults plus any command-line
/// overrides. Returns the path written.
pub fn init_config(workspace: &Path, options: &RunOptions) -> Result<PathBuf> {
    if !workspace.is_dir() {
        return Err(Error::workspace_not_found(workspace));
    }

    let mut settings = config::load_settings(workspace);
    options.apply(&mut settings);
    config::save_settings(workspace, &settings).context("Failed to write workspace config")?;

    Ok(config::config_path(workspace))
}
