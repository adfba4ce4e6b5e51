//! Command implementations for the NHL stats CLI

pub mod compare;
pub mod interactive;
pub mod player;
pub mod render;

use std::time::Duration;

use crate::{
    analyzer::PlayerAnalyzer,
    cli::GlobalOpts,
    compare::CompareKeys,
    core::{FetcherConfig, API_BASE},
    Result, Season, BASE_URL_ENV_VAR,
};

/// Pick the API base URL: explicit flag, then `NHL_STATS_BASE_URL`, then the public API.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| API_BASE.to_string())
}

/// Build the fetcher configuration from the global CLI flags.
pub fn fetcher_config(global: &GlobalOpts) -> FetcherConfig {
    FetcherConfig::default()
        .with_base_url(resolve_base_url(global.base_url.clone()))
        .with_delay(Duration::from_millis(global.delay_ms))
}

/// Analyzer for one CLI invocation.
pub fn build_analyzer(
    global: &GlobalOpts,
    season: Option<Season>,
    keys: CompareKeys,
) -> Result<PlayerAnalyzer> {
    Ok(PlayerAnalyzer::new(fetcher_config(global))?
        .with_season(season)
        .with_compare_keys(keys))
}
