//! Core utilities for the NHL stats client
//!
//! This module consolidates the plumbing used by the NHL endpoints:
//! - `cache`: In-memory resolver cache (name -> player ID)
//! - `http`: Rate-limited JSON fetcher and its configuration

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::ResolverCache;
pub use http::{FetcherConfig, RateLimitedFetcher, API_BASE, DEFAULT_DELAY};
