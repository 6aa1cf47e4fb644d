use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_board_core::{AnalysisClient, GameStore};

mod app;
mod config;
mod routes;

use app::AppState;
use config::ServerConfig;

#[derive(Parser)]
#[command(name = "chess-board-web", about = "Serves the chess board game state over HTTP")]
struct Cli {
    /// TOML config file (defaults to ./chess_board.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured listen address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let analysis = match config.analysis_url.as_deref() {
        Some(url) => {
            info!(url, "analysis service configured");
            Some(AnalysisClient::new(url)?)
        }
        None => None,
    };

    let state = AppState::new(GameStore::new(config.game.clone()), analysis);
    app::spawn_clock(state.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Server running at http://{}", config.bind);

    axum::serve(listener, app::router(state)).await?;
    Ok(())
}
