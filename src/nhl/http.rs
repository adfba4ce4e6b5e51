//! Typed access to the three NHL stats endpoints this crate reads

use crate::{
    core::RateLimitedFetcher,
    nhl::types::{PeopleEnvelope, PersonSummary, PlayerDetails, StatsEnvelope},
    PlayerId, Result, Season,
};


/// Which document `/people/{id}/stats` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKind {
    /// Season totals, one split.
    SingleSeason,
    /// One split per game, most recent first.
    GameLog,
}

impl StatsKind {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            StatsKind::SingleSeason => "statsSingleSeason",
            StatsKind::GameLog => "gameLog",
        }
    }
}

pub fn people_url(base_url: &str) -> String {
    format!("{base_url}/people")
}

pub fn player_url(base_url: &str, id: PlayerId) -> String {
    format!("{base_url}/people/{id}")
}

pub fn player_stats_url(base_url: &str, id: PlayerId) -> String {
    format!("{base_url}/people/{id}/stats")
}

/// Search players by display name. Results come back in upstream order.
pub async fn search_people(fetcher: &RateLimitedFetcher, name: &str) -> Result<Vec<PersonSummary>> {
    let url = people_url(fetcher.base_url());
    let envelope: PeopleEnvelope<PersonSummary> =
        fetcher.fetch_json(&url, &[("name", name)]).await?;
    Ok(envelope.people)
}

pub async fn get_player_stats(
    fetcher: &RateLimitedFetcher,
    id: PlayerId,
    kind: StatsKind,
    season: Option<Season>,
) -> Result<StatsEnvelope> {
    let url = player_stats_url(fetcher.base_url(), id);
    let season = season.map(|s| s.to_string());

    let mut params = vec![("stats", kind.as_query_value())];
    if let Some(season) = season.as_deref() {
        params.push(("season", season));
    }

    fetcher.fetch_json(&url, &params).await
}

/// Details for `id`: the first entry of the `people` array, if any.
pub async fn get_player_details(
    fetcher: &RateLimitedFetcher,
    id: PlayerId,
) -> Result<Option<PlayerDetails>> {
    let url = player_url(fetcher.base_url(), id);
    let envelope: PeopleEnvelope<PlayerDetails> = fetcher.fetch_json(&url, &[]).await?;
    Ok(envelope.people.into_iter().next())
}
