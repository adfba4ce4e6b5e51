//! Orchestrates resolution, aggregation, metrics and the comparison session
//!
//! [`PlayerAnalyzer`] owns every piece of mutable state the client keeps
//! (the resolver cache and the comparison session), so a fresh analyzer is a
//! fresh process as far as caching is concerned.

use serde::Serialize;
use tracing::debug;

use crate::{
    compare::{CompareKeys, ComparisonResult, ComparisonSession, ComparisonSnapshot},
    core::{FetcherConfig, RateLimitedFetcher},
    nhl::{
        aggregate, advanced_metrics, fantasy_points, trend, AdvancedMetrics, PlayerData,
        PlayerResolver, TrendResult,
    },
    Result, Season,
};

/// Aggregated data plus every derived metric, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    /// Name as the caller typed it.
    pub query: String,
    #[serde(flatten)]
    pub data: PlayerData,
    pub fantasy_points: f64,
    pub trend: TrendResult,
    pub advanced: AdvancedMetrics,
}

impl PlayerReport {
    pub fn new(query: &str, data: PlayerData) -> Self {
        Self {
            query: query.trim().to_string(),
            fantasy_points: fantasy_points(&data.current_stats),
            trend: trend(&data.last_five_games),
            advanced: advanced_metrics(&data.current_stats),
            data,
        }
    }

    /// Name to show: upstream full name, or the query if there is none.
    pub fn display_name(&self) -> &str {
        self.data.details.full_name.as_deref().unwrap_or(&self.query)
    }

    pub fn snapshot(&self) -> ComparisonSnapshot {
        ComparisonSnapshot::from_player_data(&self.data, &self.query)
    }
}

/// Result of one [`PlayerAnalyzer::start_or_complete`] step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SessionOutcome {
    /// First player stored; waiting for the second.
    AwaitingSecond { first: String },
    Completed(ComparisonResult),
}

/// Result of [`PlayerAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Analysis {
    Report(PlayerReport),
    Comparison(ComparisonResult),
}

#[derive(Debug)]
pub struct PlayerAnalyzer {
    fetcher: RateLimitedFetcher,
    resolver: PlayerResolver,
    session: ComparisonSession,
    season: Option<Season>,
}

impl PlayerAnalyzer {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        Ok(Self {
            fetcher: RateLimitedFetcher::new(config)?,
            resolver: PlayerResolver::new(),
            session: ComparisonSession::default(),
            season: None,
        })
    }

    /// Compare over `keys` instead of the standard stat set.
    pub fn with_compare_keys(mut self, keys: CompareKeys) -> Self {
        self.session = ComparisonSession::new(keys);
        self
    }

    /// Query `season` instead of the current one.
    pub fn with_season(mut self, season: Option<Season>) -> Self {
        self.season = season;
        self
    }

    pub fn fetcher(&self) -> &RateLimitedFetcher {
        &self.fetcher
    }

    pub fn resolver(&self) -> &PlayerResolver {
        &self.resolver
    }

    pub fn session(&self) -> &ComparisonSession {
        &self.session
    }

    /// Resolve `name` and aggregate that player's data.
    pub async fn lookup(&mut self, name: &str) -> Result<PlayerData> {
        let id = self.resolver.resolve(&self.fetcher, name).await?;
        aggregate(&self.fetcher, id, self.season).await
    }

    /// Look up `name` and derive its metrics. The session is not touched.
    pub async fn report(&mut self, name: &str) -> Result<PlayerReport> {
        let data = self.lookup(name).await?;
        Ok(PlayerReport::new(name, data))
    }

    /// Stage an already displayed player as the first side of a comparison.
    ///
    /// Returns the snapshot this replaced, if one was pending.
    pub fn stage(&mut self, report: &PlayerReport) -> Option<ComparisonSnapshot> {
        debug!(first = report.display_name(), "staged for comparison");
        self.session.stage(report.snapshot())
    }

    /// Drop any pending comparison.
    pub fn cancel_comparison(&mut self) -> Option<ComparisonSnapshot> {
        self.session.cancel()
    }

    /// Drive the comparison session one step with `name`.
    ///
    /// With nothing pending, `name` becomes the first player. Otherwise the
    /// pending player is compared against `name` and the session empties.
    /// A failed lookup leaves the session exactly as it was, so a failed
    /// second name can simply be retried.
    pub async fn start_or_complete(&mut self, name: &str) -> Result<SessionOutcome> {
        let data = self.lookup(name).await?;
        let snapshot = ComparisonSnapshot::from_player_data(&data, name.trim());

        if let Some(result) = self.session.complete(&snapshot) {
            return Ok(SessionOutcome::Completed(result));
        }

        let first = snapshot.name.clone();
        self.session.stage(snapshot);
        Ok(SessionOutcome::AwaitingSecond { first })
    }

    /// Look up `name` and either report on it or, if a comparison is
    /// pending, complete that comparison with it.
    pub async fn analyze(&mut self, name: &str) -> Result<Analysis> {
        let report = self.report(name).await?;

        match self.session.complete(&report.snapshot()) {
            Some(result) => Ok(Analysis::Comparison(result)),
            None => Ok(Analysis::Report(report)),
        }
    }
}
