use crate::PlayerId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Treat an explicit `null` the same as an absent field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stat name -> numeric value, as found in a split's `stat` object.
///
/// Non-numeric values such as `"timeOnIce": "1234:56"` are dropped when
/// deserializing; absent stats read as zero through [`value_or_zero`].
///
/// [`value_or_zero`]: PlayerStatRecord::value_or_zero
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerStatRecord {
    values: BTreeMap<String, f64>,
}

impl<'de> Deserialize<'de> for PlayerStatRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<BTreeMap<String, Value>> = Deserialize::deserialize(deserializer)?;
        let values = raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| v.as_f64().map(|n| (k, n)))
            .collect();
        Ok(Self { values })
    }
}

impl PlayerStatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: &str) -> Option<f64> {
        self.values.get(stat).copied()
    }

    pub fn value_or_zero(&self, stat: &str) -> f64 {
        self.get(stat).unwrap_or(0.0)
    }

    pub fn insert(&mut self, stat: impl Into<String>, value: f64) {
        self.values.insert(stat.into(), value);
    }

    /// Stat names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PlayerStatRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PositionRef {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// Biographical data from `/people/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerDetails {
    #[serde(default)]
    pub id: Option<PlayerId>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "primaryNumber", default)]
    pub primary_number: Option<String>,
    #[serde(rename = "currentAge", default)]
    pub current_age: Option<u32>,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<PositionRef>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<TeamRef>,
}

impl PlayerDetails {
    pub fn position_abbreviation(&self) -> Option<&str> {
        self.primary_position.as_ref()?.abbreviation.as_deref()
    }

    pub fn team_name(&self) -> Option<&str> {
        self.current_team.as_ref()?.name.as_deref()
    }
}

/// Search hit from `/people?name=`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSummary {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
}

/// Top-level envelope for both the name search and the details endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PeopleEnvelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "de_null_default")]
    pub people: Vec<T>,
}

/// Top-level envelope for `/people/{id}/stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsEnvelope {
    #[serde(default, deserialize_with = "de_null_default")]
    pub stats: Vec<StatsBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsBlock {
    #[serde(default, deserialize_with = "de_null_default")]
    pub splits: Vec<StatSplit>,
}

/// One split: a season total or a single game, depending on the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "isHome", default)]
    pub is_home: Option<bool>,
    #[serde(default)]
    pub opponent: Option<TeamRef>,
    #[serde(default)]
    pub stat: PlayerStatRecord,
}

impl StatsEnvelope {
    /// Splits of the first stats block, or an empty slice if absent.
    pub fn first_splits(&self) -> &[StatSplit] {
        self.stats
            .first()
            .map(|block| block.splits.as_slice())
            .unwrap_or(&[])
    }
}

/// A single game from the game log, most recent first in sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameLogEntry {
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub is_home: Option<bool>,
    pub stat: PlayerStatRecord,
}

impl GameLogEntry {
    /// Game with only a `points` value, the one stat the trend reads.
    pub fn with_points(points: f64) -> Self {
        Self {
            stat: [("points", points)].into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn points(&self) -> f64 {
        self.stat.value_or_zero("points")
    }
}

impl From<StatSplit> for GameLogEntry {
    fn from(split: StatSplit) -> Self {
        Self {
            date: split.date,
            opponent: split.opponent.and_then(|team| team.name),
            is_home: split.is_home,
            stat: split.stat,
        }
    }
}

/// Merged result of the three per-player requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerData {
    pub current_stats: PlayerStatRecord,
    pub last_five_games: Vec<GameLogEntry>,
    pub details: PlayerDetails,
}
