//! roster-board API server
//!
//! A REST API managing team rosters and task boards, each backed by its
//! own single-file SQLite database.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use roster_board::api::{self, AppState};
use roster_board::config::Config;
use roster_board::db::{BoardDb, RosterDb};
use roster_board::logging;

/// Roster and task board API server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for the HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the roster database file (overrides config)
    #[arg(long)]
    roster_db: Option<PathBuf>,

    /// Path to the board database file (overrides config)
    #[arg(long)]
    board_db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = cli.roster_db {
        config.server.roster_db_path = path;
    }
    if let Some(path) = cli.board_db {
        config.server.board_db_path = path;
    }

    ensure_parent_dir(&config.server.roster_db_path)?;
    ensure_parent_dir(&config.server.board_db_path)?;

    let roster = RosterDb::open(&config.server.roster_db_path)?;
    let board = BoardDb::open(&config.server.board_db_path)?;
    info!(
        "Opened stores: roster={}, board={}",
        config.server.roster_db_path.display(),
        config.server.board_db_path.display()
    );

    api::serve(AppState { roster, board }, config.server.port).await
}
