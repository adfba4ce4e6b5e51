//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nhl_stats::{
    cli::{Commands, NhlStats},
    commands::{
        build_analyzer, compare::handle_compare, interactive::handle_interactive,
        player::handle_player,
    },
    compare::CompareKeys,
    Result,
};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "nhl_stats=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NhlStats::parse();
    init_logging(app.global.verbose);

    match app.command {
        Commands::Player { name, season, json } => {
            let mut analyzer = build_analyzer(&app.global, season, CompareKeys::Standard)?;
            handle_player(&mut analyzer, &name, json).await?
        }

        Commands::Compare {
            first,
            second,
            season,
            all_stats,
            json,
        } => {
            let keys = if all_stats {
                CompareKeys::AllFromFirst
            } else {
                CompareKeys::Standard
            };
            let mut analyzer = build_analyzer(&app.global, season, keys)?;
            handle_compare(&mut analyzer, &first, &second, json).await?
        }

        Commands::Interactive { season } => {
            let mut analyzer = build_analyzer(&app.global, season, CompareKeys::Standard)?;
            handle_interactive(&mut analyzer).await?
        }
    }

    Ok(())
}
