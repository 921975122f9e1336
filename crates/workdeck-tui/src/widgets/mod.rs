//! Custom widget components

mod card_details;
mod connect_modal;
mod context_menu;
mod conversation;
mod header;
pub mod modal_overlay;
mod project_card;
mod status_bar;
mod toasts;

pub use card_details::{DetailsPlaceholder, RepoDetails};
pub use connect_modal::ConnectModal;
pub use context_menu::ContextMenu;
pub use conversation::ConversationView;
pub use header::MainHeader;
pub use project_card::ProjectCard;
pub use status_bar::StatusBar;
pub use toasts::{ToastStack, TOAST_HEIGHT};
