//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use clap::Parser;
use mlb_player_eval::{
    api::ApiClient,
    cli::{types::LogLevel, Commands, MlbEval},
    commands::{
        details::handle_details, filter::handle_filter, players::handle_players,
        trade::handle_trade,
    },
    Result,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a stderr subscriber so stdout stays clean for `--json` output.
fn init_logging(log_level: LogLevel) -> Result<()> {
    let level = LevelFilter::from(log_level);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = MlbEval::parse();
    init_logging(app.log_level)?;

    let client = ApiClient::with_base_url(app.base_url);

    match app.command {
        Commands::Players { year, json } => handle_players(&client, year, json).await?,

        Commands::Filter { filters, json } => {
            handle_filter(&client, &filters.into(), json).await?
        }

        Commands::Trade { team1, team2, json } => {
            handle_trade(&client, &team1, &team2, json).await?
        }

        Commands::Details { name, json } => handle_details(&client, &name, json).await?,
    }

    Ok(())
}
