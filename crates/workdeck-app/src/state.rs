//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::Duration;

use crate::card::{CardProps, ProjectMenuCard};
use crate::config::Settings;
use crate::connect_modal::ConnectModalState;
use crate::services::{SharedConversation, ToastQueue};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Progress of GitHub link detection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkStatus {
    #[default]
    Detecting,
    Ready,
    Failed(String),
}

/// Terminal-independent rectangle recorded by the view for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Clickable regions from the last rendered frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Ellipsis trigger on the card
    pub trigger: Option<HitRect>,
    /// "Connect" affordance of the placeholder view
    pub connect_button: Option<HitRect>,
    /// Context menu popup, with one row per item starting at `menu_first_row`
    pub context_menu: Option<HitRect>,
    pub menu_first_row: u16,
    /// Connect modal dialog (everything else is backdrop while it is open)
    pub connect_modal: Option<HitRect>,
    /// Close control on the modal border
    pub connect_modal_close: Option<HitRect>,
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Workspace root shown on the card and exported on download
    pub workspace: PathBuf,
    pub project_name: Option<String>,
    pub settings: Settings,

    /// Card inputs, filled in by link detection and the connect modal
    pub props: CardProps,
    pub card: ProjectMenuCard,
    pub connect_form: ConnectModalState,
    pub link_status: LinkStatus,

    /// Token entered in the connect modal. Never logged.
    pub github_token: Option<String>,

    /// Path of the last successful workspace export
    pub last_download: Option<PathBuf>,

    pub conversation: SharedConversation,
    pub toasts: ToastQueue,

    pub hit_areas: HitAreas,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(PathBuf::from("."), Settings::default())
    }

    pub fn with_settings(workspace: PathBuf, settings: Settings) -> Self {
        let project_name = workspace
            .canonicalize()
            .unwrap_or_else(|_| workspace.clone())
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let conversation = SharedConversation::new(settings.ui.conversation_limit);

        Self {
            phase: AppPhase::default(),
            workspace,
            project_name,
            settings,
            props: CardProps::default(),
            card: ProjectMenuCard::new(),
            connect_form: ConnectModalState::new(),
            link_status: LinkStatus::default(),
            github_token: None,
            last_download: None,
            conversation,
            toasts: ToastQueue::new(),
            hit_areas: HitAreas::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.settings.ui.toast_duration_ms)
    }

    /// Number of items in the context menu for the current props
    pub fn menu_item_count(&self) -> usize {
        crate::context_menu::ContextMenuItem::for_connection(self.props.connected).len()
    }
}
