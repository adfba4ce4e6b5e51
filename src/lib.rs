//! NHL Player Stats Library
//!
//! A Rust client for the public NHL stats API that resolves player names,
//! aggregates season and game-log data, and derives presentation-ready
//! metrics.
//!
//! ## Features
//!
//! - **Memoized Name Resolution**: each distinct name costs at most one search request per process
//! - **Concurrent Aggregation**: season totals, game log and details fetched together, fail-fast
//! - **Derived Metrics**: fantasy points, hot/cold trend over the last 5 games, PDO and xGF
//! - **Player Comparison**: two-step session pairing one player's stats against another's
//! - **Rate Limiting**: a fixed delay before every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats::{analyzer::PlayerAnalyzer, core::FetcherConfig};
//!
//! # async fn example() -> nhl_stats::Result<()> {
//! let mut analyzer = PlayerAnalyzer::new(FetcherConfig::default())?;
//! let report = analyzer.report("Nathan MacKinnon").await?;
//!
//! println!(
//!     "{}: {:.1} FP, {} ({} pts in last 5 GP)",
//!     report.display_name(),
//!     report.fantasy_points,
//!     report.trend.classification,
//!     report.trend.points_in_window,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI reads an alternate API base URL from the environment:
//! ```bash
//! export NHL_STATS_BASE_URL=http://localhost:8080/api/v1
//! ```

pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod compare;
pub mod core;
pub mod error;
pub mod nhl;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season};
pub use error::{Result, StatsError};
pub use nhl::types::{GameLogEntry, PlayerData, PlayerDetails, PlayerStatRecord};

pub const BASE_URL_ENV_VAR: &str = "NHL_STATS_BASE_URL";
