//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run_with_workspace`: load settings, wire services, run, clean up
//! - `run_loop`: drain background messages, render, poll terminal input

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use workdeck_app::config::{self, Settings};
use workdeck_app::message::Message;
use workdeck_app::process::process_message;
use workdeck_app::services::{
    spawn_session_writer, ArchiveExporter, ChannelTransport, Services, TracingAnalytics,
};
use workdeck_app::signals;
use workdeck_app::state::AppState;
use workdeck_core::prelude::*;

use super::{event, render, terminal};

/// How long shutdown waits for the session writer to flush
const WRITER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Command-line overrides applied on top of `.workdeck/config.toml`
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub session_url: Option<String>,
    pub download_dir: Option<PathBuf>,
}

impl RunOptions {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.session_url {
            settings.session.url = Some(url.clone());
        }
        if let Some(dir) = &self.download_dir {
            settings.workspace.download_dir = Some(dir.clone());
        }
    }
}

/// Run the TUI for a workspace
pub async fn run_with_workspace(workspace: &Path, options: RunOptions) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut settings = config::load_settings(workspace);
    options.apply(&mut settings);
    info!(
        "Loaded settings: session={}, analytics={}",
        settings.session.url.as_deref().unwrap_or("offline"),
        settings.analytics.enabled
    );

    let mut state = AppState::with_settings(workspace.to_path_buf(), settings.clone());

    // Unified message channel (signal handler, background actions)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Shutdown signal for background tasks
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let (transport, event_rx) = ChannelTransport::channel();
    let writer = spawn_session_writer(settings.session.url.clone(), event_rx, shutdown_rx);

    let services = build_services(workspace, &settings, &state, transport);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    // Kick off link detection before the first frame
    process_message(&mut state, Message::RefreshGitHubLink, &services, &msg_tx);

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse() {
        warn!("{}", e);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &services);

    terminal::disable_mouse();
    ratatui::restore();

    // Dropping the services drops the last transport sender
    drop(services);
    shutdown_writer(writer, shutdown_tx).await;

    result
}

/// Wire the card's collaborators. Conversation and toasts share storage
/// with `state` so the view sees what the card records.
fn build_services(
    workspace: &Path,
    settings: &Settings,
    state: &AppState,
    transport: ChannelTransport,
) -> Services {
    let exporter = ArchiveExporter::new(
        workspace,
        config::resolve_download_dir(settings),
        settings.workspace.archive_name.clone(),
    );

    Services {
        transport: Arc::new(transport),
        conversation: Arc::new(state.conversation.clone()),
        notifier: Arc::new(state.toasts.clone()),
        analytics: Arc::new(TracingAnalytics::new(settings.analytics.enabled)),
        exporter: Arc::new(exporter),
    }
}

async fn shutdown_writer(writer: JoinHandle<()>, shutdown_tx: watch::Sender<bool>) {
    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(WRITER_SHUTDOWN_TIMEOUT, writer).await {
        Ok(Ok(())) => debug!("Session writer stopped"),
        Ok(Err(e)) => warn!("Session writer task failed: {}", e),
        Err(_) => warn!("Session writer did not stop within {:?}", WRITER_SHUTDOWN_TIMEOUT),
    }
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (signal handler, link detection)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, services, msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, services, msg_tx);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options_override_settings() {
        let mut settings = Settings::default();
        settings.session.url = Some("ws://file".to_string());

        RunOptions {
            session_url: Some("ws://cli".to_string()),
            download_dir: Some(PathBuf::from("/tmp/out")),
        }
        .apply(&mut settings);

        assert_eq!(settings.session.url.as_deref(), Some("ws://cli"));
        assert_eq!(
            settings.workspace.download_dir,
            Some(PathBuf::from("/tmp/out"))
        );
    }

    #[test]
    fn test_empty_options_keep_file_values() {
        let mut settings = Settings::default();
        settings.session.url = Some("ws://file".to_string());

        RunOptions::default().apply(&mut settings);

        assert_eq!(settings.session.url.as_deref(), Some("ws://file"));
    }

    #[tokio::test]
    async fn test_download_through_built_services_writes_archive() {
        let workspace = tempfile::tempdir().unwrap();
        std::fs::write(workspace.path().join("main.rs"), "fn main() {}").unwrap();
        let out = tempfile::tempdir().unwrap();

        let mut settings = Settings::default();
        settings.workspace.download_dir = Some(out.path().to_path_buf());
        let mut state = AppState::with_settings(workspace.path().to_path_buf(), settings.clone());

        let (transport, _event_rx) = ChannelTransport::channel();
        let services = build_services(workspace.path(), &settings, &state, transport);
        let (msg_tx, _msg_rx) = mpsc::channel(8);

        process_message(&mut state, Message::DownloadWorkspace, &services, &msg_tx);

        assert_eq!(
            state.last_download,
            Some(out.path().join("workspace.tar.gz"))
        );
        assert!(state.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_push_through_built_services_reaches_transport() {
        let workspace = tempfile::tempdir().unwrap();
        let settings = Settings::default();
        let mut state = AppState::with_settings(workspace.path().to_path_buf(), settings.clone());

        let (transport, mut event_rx) = ChannelTransport::channel();
        let services = build_services(workspace.path(), &settings, &state, transport);
        let (msg_tx, _msg_rx) = mpsc::channel(8);

        process_message(&mut state, Message::PushToGitHub, &services, &msg_tx);

        let event = event_rx.try_recv().expect("event queued for the session");
        assert_eq!(
            event.args.content,
            workdeck_core::PUSH_TO_GITHUB_PROMPT
        );
        assert_eq!(state.conversation.len(), 1);
    }
}
