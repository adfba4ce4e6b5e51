//! Player name -> ID resolution with per-process memoization

use tracing::{debug, info, warn};

use crate::{
    core::{RateLimitedFetcher, ResolverCache},
    error::StatsError,
    nhl::http::search_people,
    PlayerId, Result,
};

/// Resolves display names to [`PlayerId`]s, remembering every success.
///
/// When a search matches several players the first result is taken as-is;
/// disambiguation is left to the caller, who can type a fuller name.
#[derive(Debug, Default)]
pub struct PlayerResolver {
    cache: ResolverCache,
}

impl PlayerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: ResolverCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &ResolverCache {
        &self.cache
    }

    /// Resolve `name`, hitting the network only on a cache miss.
    ///
    /// Names are trimmed but otherwise matched case-sensitively. Failed
    /// lookups are not cached.
    pub async fn resolve(&mut self, fetcher: &RateLimitedFetcher, name: &str) -> Result<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StatsError::EmptyPlayerName);
        }

        if let Some(id) = self.cache.get(name) {
            debug!(name, %id, "resolver cache hit");
            return Ok(id);
        }

        debug!(name, "resolver cache miss");
        let people = search_people(fetcher, name).await?;

        let Some(first) = people.into_iter().next() else {
            warn!(name, "no players matched");
            return Err(StatsError::PlayerNotFound {
                name: name.to_string(),
            });
        };

        info!(
            name,
            id = %first.id,
            full_name = first.full_name.as_deref().unwrap_or("?"),
            "resolved player"
        );
        Ok(self.cache.insert(name, first.id))
    }
}
