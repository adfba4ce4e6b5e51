//! Error types for the NHL stats client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Player \"{name}\" not found. Try full names like \"Nathan MacKinnon\"")]
    PlayerNotFound { name: String },

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("Invalid base URL: {url} (expected http:// or https://)")]
    InvalidBaseUrl { url: String },
}
