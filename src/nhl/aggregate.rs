//! Merge season totals, the game log and player details into one record

use tracing::debug;

use crate::{
    core::RateLimitedFetcher,
    nhl::{
        compute::TREND_WINDOW,
        http::{get_player_details, get_player_stats, StatsKind},
        types::{GameLogEntry, PlayerData, PlayerStatRecord, StatsEnvelope},
    },
    PlayerId, Result, Season,
};

/// Fetch the three per-player documents concurrently and merge them.
///
/// The join is fail-fast: the first request to fail decides the error and
/// the other requests are dropped without their results being looked at.
/// Missing nested structure inside a successful response is not an error;
/// it yields an empty record instead.
pub async fn aggregate(
    fetcher: &RateLimitedFetcher,
    id: PlayerId,
    season: Option<Season>,
) -> Result<PlayerData> {
    let (season_stats, game_log, details) = tokio::try_join!(
        get_player_stats(fetcher, id, StatsKind::SingleSeason, season),
        get_player_stats(fetcher, id, StatsKind::GameLog, season),
        get_player_details(fetcher, id),
    )?;

    let data = PlayerData {
        current_stats: current_stats(&season_stats),
        last_five_games: recent_games(game_log, TREND_WINDOW),
        details: details.unwrap_or_default(),
    };
    debug!(
        %id,
        stats = data.current_stats.len(),
        games = data.last_five_games.len(),
        "aggregated player data"
    );
    Ok(data)
}

/// Stat object of the first split, or an empty record.
pub fn current_stats(envelope: &StatsEnvelope) -> PlayerStatRecord {
    envelope
        .first_splits()
        .first()
        .map(|split| split.stat.clone())
        .unwrap_or_default()
}

/// The first `limit` game-log splits, most recent first.
pub fn recent_games(envelope: StatsEnvelope, limit: usize) -> Vec<GameLogEntry> {
    envelope
        .stats
        .into_iter()
        .next()
        .map(|block| {
            block
                .splits
                .into_iter()
                .take(limit)
                .map(GameLogEntry::from)
                .collect()
        })
        .unwrap_or_default()
}
