//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::Season;

/// Connection and logging flags shared by every command.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (or set `NHL_STATS_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Delay before every request, in milliseconds.
    #[clap(long, global = true, default_value_t = 300)]
    pub delay_ms: u64,

    /// Log requests and cache activity to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a player card: season stats, fantasy points, trend and PDO/xGF.
    Player {
        /// Player name, e.g. "Nathan MacKinnon".
        name: String,

        /// Season, e.g. 20222023 (defaults to the current season).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare two players side by side.
    Compare {
        /// First player name.
        first: String,

        /// Second player name.
        second: String,

        /// Season, e.g. 20222023 (defaults to the current season).
        #[clap(long, short)]
        season: Option<Season>,

        /// Compare every stat the first player has instead of G/A/P/+-.
        #[clap(long)]
        all_stats: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Read player names from stdin, one per line.
    ///
    /// `:compare` stages the last player shown for comparison with the next
    /// name, `:cancel` drops it and `:quit` exits.
    Interactive {
        /// Season, e.g. 20222023 (defaults to the current season).
        #[clap(long, short)]
        season: Option<Season>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nhl-stats", about = "NHL player stats CLI")]
pub struct NhlStats {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
