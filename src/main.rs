//! Tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, FrontendConfig, GameSession, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => FrontendConfig::from_file(path)?,
        None => FrontendConfig::default(),
    }
    .with_overrides(cli.player_x.clone(), cli.player_o.clone());

    let opponent = cli.opponent();
    let names = config.names(opponent)?;
    let session = GameSession::new(cli.rule_mode(), opponent);
    info!(mode = %cli.rule_mode(), ?opponent, "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(
        session,
        names,
        config.think_delay(),
        stdin.lock(),
        stdout.lock(),
    );
    terminal.run()
}
