//! ID types for the NHL stats API.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NHL player IDs.
///
/// Produced by the player resolver and used as the key for every
/// per-player endpoint.
///
/// # Examples
///
/// ```rust
/// use nhl_stats::PlayerId;
///
/// let id = PlayerId::new(8477492);
/// assert_eq!(id.as_u64(), 8477492);
/// assert_eq!(id.to_string(), "8477492");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
