//! NHL stats API: endpoints, response types, name resolution, aggregation
//! and derived metrics.

pub mod aggregate;
pub mod compute;
pub mod http;
pub mod resolver;
pub mod types;

pub use aggregate::aggregate;
pub use compute::{advanced_metrics, fantasy_points, trend, AdvancedMetrics, Trend, TrendResult};
pub use resolver::PlayerResolver;
pub use types::{GameLogEntry, PlayerData, PlayerDetails, PlayerStatRecord};
