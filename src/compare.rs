//! Two-step player comparison
//!
//! A [`ComparisonSession`] holds the first player's stats while the caller
//! looks up a second player, then pairs the two into a [`ComparisonResult`].
//! At most one comparison is pending; staging a new first player replaces
//! the old one.

use serde::Serialize;

use crate::nhl::{PlayerData, PlayerStatRecord};

/// Stats compared when no other key set is requested.
pub const STANDARD_COMPARE_KEYS: [&str; 4] = ["goals", "assists", "points", "plusMinus"];

/// Which stat rows a comparison contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareKeys {
    /// goals, assists, points, plusMinus
    #[default]
    Standard,
    /// Every stat the first player has, in sorted order.
    AllFromFirst,
}

/// A player's name and season stats, held while awaiting the second player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSnapshot {
    pub name: String,
    pub stats: PlayerStatRecord,
}

impl ComparisonSnapshot {
    /// Snapshot of aggregated data, named after the upstream full name when
    /// there is one and `fallback_name` otherwise.
    pub fn from_player_data(data: &PlayerData, fallback_name: &str) -> Self {
        Self {
            name: data
                .details
                .full_name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            stats: data.current_stats.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Leader {
    First,
    Second,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub stat: String,
    pub first: f64,
    pub second: f64,
    pub leader: Leader,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub first_name: String,
    pub second_name: String,
    pub rows: Vec<ComparisonRow>,
}

/// Pair two snapshots row by row. Missing stats count as zero.
pub fn compare(
    first: &ComparisonSnapshot,
    second: &ComparisonSnapshot,
    keys: CompareKeys,
) -> ComparisonResult {
    let stat_names: Vec<String> = match keys {
        CompareKeys::Standard => STANDARD_COMPARE_KEYS.iter().map(|k| k.to_string()).collect(),
        CompareKeys::AllFromFirst => first.stats.keys().map(str::to_string).collect(),
    };

    let rows = stat_names
        .into_iter()
        .map(|stat| {
            let a = first.stats.value_or_zero(&stat);
            let b = second.stats.value_or_zero(&stat);
            let leader = if a > b {
                Leader::First
            } else if b > a {
                Leader::Second
            } else {
                Leader::Tie
            };
            ComparisonRow {
                stat,
                first: a,
                second: b,
                leader,
            }
        })
        .collect();

    ComparisonResult {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        rows,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Empty,
    AwaitingSecond(ComparisonSnapshot),
}

#[derive(Debug, Default)]
pub struct ComparisonSession {
    state: SessionState,
    keys: CompareKeys,
}

impl ComparisonSession {
    pub fn new(keys: CompareKeys) -> Self {
        Self {
            state: SessionState::Empty,
            keys,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn keys(&self) -> CompareKeys {
        self.keys
    }

    pub fn pending(&self) -> Option<&ComparisonSnapshot> {
        match &self.state {
            SessionState::Empty => None,
            SessionState::AwaitingSecond(snapshot) => Some(snapshot),
        }
    }

    /// Hold `snapshot` as the first player. Returns any snapshot it replaced.
    pub fn stage(&mut self, snapshot: ComparisonSnapshot) -> Option<ComparisonSnapshot> {
        match std::mem::replace(&mut self.state, SessionState::AwaitingSecond(snapshot)) {
            SessionState::Empty => None,
            SessionState::AwaitingSecond(previous) => Some(previous),
        }
    }

    /// Drop the pending snapshot, if any.
    pub fn cancel(&mut self) -> Option<ComparisonSnapshot> {
        match std::mem::take(&mut self.state) {
            SessionState::Empty => None,
            SessionState::AwaitingSecond(previous) => Some(previous),
        }
    }

    /// Pair the pending snapshot against `second` and return to `Empty`.
    ///
    /// Returns `None`, leaving the state alone, when nothing is pending.
    pub fn complete(&mut self, second: &ComparisonSnapshot) -> Option<ComparisonResult> {
        let first = self.cancel()?;
        Some(compare(&first, second, self.keys))
    }
}
