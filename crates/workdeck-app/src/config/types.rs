//! Configuration types for `.workdeck/config.toml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application settings (.workdeck/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub workspace: WorkspaceSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

/// Agent session connection
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SessionSettings {
    /// WebSocket URL of the agent session. Offline when unset.
    #[serde(default)]
    pub url: Option<String>,
}

/// Workspace export settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkspaceSettings {
    /// Where archives are written. Defaults to the user's download directory.
    /// A leading `~/` expands to the home directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            download_dir: None,
            archive_name: default_archive_name(),
        }
    }
}

fn default_archive_name() -> String {
    "workspace.tar.gz".to_string()
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Maximum number of conversation messages kept for display
    #[serde(default = "default_conversation_limit")]
    pub conversation_limit: usize,

    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            conversation_limit: default_conversation_limit(),
            icons: IconMode::default(),
        }
    }
}

fn default_toast_duration_ms() -> u64 {
    5_000
}

fn default_conversation_limit() -> usize {
    200
}

/// Analytics settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalyticsSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.session.url, None);
        assert_eq!(settings.workspace.archive_name, "workspace.tar.gz");
        assert_eq!(settings.ui.toast_duration_ms, 5_000);
        assert_eq!(settings.ui.conversation_limit, 200);
        assert!(settings.analytics.enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[session]
url = "ws://localhost:3000/ws"

[ui]
icons = "nerd_fonts"
"#,
        )
        .unwrap();

        assert_eq!(settings.session.url.as_deref(), Some("ws://localhost:3000/ws"));
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.toast_duration_ms, 5_000);
        assert_eq!(settings.workspace.archive_name, "workspace.tar.gz");
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
