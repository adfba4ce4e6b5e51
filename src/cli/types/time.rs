//! Season type for NHL stat queries.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NHL season in the API's eight-digit form, e.g. `20232024`.
///
/// Parsing also accepts the `2023-2024` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u32);

impl Season {
    pub fn new(season: u32) -> Self {
        Self(season)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.trim().chars().filter(|c| *c != '-').collect();
        Ok(Self(compact.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_compact_str() {
        let season: Season = "20232024".parse().unwrap();
        assert_eq!(season.as_u32(), 20232024);
    }

    #[test]
    fn test_season_from_dashed_str() {
        let season: Season = "2022-2023".parse().unwrap();
        assert_eq!(season, Season::new(20222023));
    }

    #[test]
    fn test_season_invalid() {
        assert!("next year".parse::<Season>().is_err());
    }
}
