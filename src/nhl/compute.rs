use serde::Serialize;
use std::fmt;

use crate::nhl::types::{GameLogEntry, PlayerStatRecord};


/// Number of most recent games the trend looks at.
pub const TREND_WINDOW: usize = 5;

/// Points in the window at or above which a player is hot.
pub const HOT_THRESHOLD: f64 = 8.0;

/// Points in the window at or below which a player is cold.
pub const COLD_THRESHOLD: f64 = 2.0;

/// Per-stat fantasy weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FantasyScoring {
    pub goal: f64,
    pub assist: f64,
    pub shot: f64,
}

impl Default for FantasyScoring {
    fn default() -> Self {
        Self {
            goal: 2.0,
            assist: 1.0,
            shot: 0.1,
        }
    }
}

impl FantasyScoring {
    pub fn points(&self, stats: &PlayerStatRecord) -> f64 {
        stats.value_or_zero("goals") * self.goal
            + stats.value_or_zero("assists") * self.assist
            + stats.value_or_zero("shots") * self.shot
    }
}

/// Fantasy points under the standard weights (G 2, A 1, SOG 0.1).
pub fn fantasy_points(stats: &PlayerStatRecord) -> f64 {
    FantasyScoring::default().points(stats)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Hot,
    Cold,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Hot => "Hot",
            Trend::Cold => "Cold",
            Trend::Neutral => "Neutral",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendResult {
    pub points_in_window: f64,
    pub classification: Trend,
}

/// Classify recent form from the first [`TREND_WINDOW`] games.
///
/// Short windows are summed as-is, not scaled up to five games.
pub fn trend(games: &[GameLogEntry]) -> TrendResult {
    let points_in_window: f64 = games.iter().take(TREND_WINDOW).map(GameLogEntry::points).sum();

    let classification = if points_in_window >= HOT_THRESHOLD {
        Trend::Hot
    } else if points_in_window <= COLD_THRESHOLD {
        Trend::Cold
    } else {
        Trend::Neutral
    };

    TrendResult {
        points_in_window,
        classification,
    }
}

/// PDO and xGF; `None` where the source stats are missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AdvancedMetrics {
    pub pdo: Option<f64>,
    pub xgf: Option<f64>,
}

pub fn advanced_metrics(stats: &PlayerStatRecord) -> AdvancedMetrics {
    let pdo = match (stats.get("shootingPercentage"), stats.get("savePercentage")) {
        (Some(sh), Some(sv)) => Some(sh + sv),
        _ => None,
    };

    AdvancedMetrics {
        pdo,
        xgf: stats.get("xGoalsFor"),
    }
}
