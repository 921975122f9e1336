//! workdeck - terminal project card for an agent workspace
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use workdeck::RunOptions;
use workdeck_core::prelude::*;

/// workdeck - push or download an agent workspace from the terminal
#[derive(Parser, Debug)]
#[command(name = "workdeck")]
#[command(about = "Project card for an agent workspace", long_about = None)]
struct Args {
    /// Path to the workspace (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Websocket URL of the agent session
    #[arg(long, value_name = "URL")]
    session_url: Option<String>,

    /// Directory the workspace archive is written to
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,

    /// Write .workdeck/config.toml with defaults and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let workspace = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let options = RunOptions {
        session_url: args.session_url,
        download_dir: args.download_dir,
    };

    if args.init {
        let path = workdeck::init_config(&workspace, &options)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    if !workspace.is_dir() {
        eprintln!("Workspace not found: {}", workspace.display());
        std::process::exit(1);
    }

    workdeck::run_with_workspace(&workspace, options).await
}
