//! Settings parser for .workdeck/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use workdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const WORKDECK_DIR: &str = ".workdeck";

/// Path of the workspace's config file, whether or not it exists
pub fn config_path(workspace: &Path) -> PathBuf {
    workspace.join(WORKDECK_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<workspace>/.workdeck/config.toml`.
///
/// Missing or unreadable files fall back to defaults.
pub fn load_settings(workspace: &Path) -> Settings {
    let config_path = config_path(workspace);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write settings back to `<workspace>/.workdeck/config.toml`
pub fn save_settings(workspace: &Path, settings: &Settings) -> Result<()> {
    let dir = workspace.join(WORKDECK_DIR);
    std::fs::create_dir_all(&dir)
        .map_err(|e| Error::config(format!("Failed to create .workdeck dir: {}", e)))?;

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    std::fs::write(dir.join(CONFIG_FILENAME), content)?;
    Ok(())
}

/// Resolve where workspace archives are written
pub fn resolve_download_dir(settings: &Settings) -> PathBuf {
    match &settings.workspace.download_dir {
        Some(dir) => expand_home(dir),
        None => dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(WORKDECK_DIR)).unwrap();
        std::fs::write(
            dir.path().join(WORKDECK_DIR).join(CONFIG_FILENAME),
            "[ui\nbroken",
        )
        .unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.session.url = Some("ws://127.0.0.1:9000/ws".to_string());
        settings.analytics.enabled = false;

        save_settings(dir.path(), &settings).unwrap();

        assert_eq!(load_settings(dir.path()), settings);
    }

    #[test]
    fn test_resolve_explicit_download_dir() {
        let mut settings = Settings::default();
        settings.workspace.download_dir = Some(PathBuf::from("/tmp/exports"));
        assert_eq!(resolve_download_dir(&settings), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_expand_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/Downloads")), home.join("Downloads"));
        }
        assert_eq!(expand_home(Path::new("/abs/path")), PathBuf::from("/abs/path"));
    }
}
