use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Forecast API request to {url} failed with status {status}: {reason}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        reason: String,
    },

    #[error("Failed to parse forecast response")]
    JsonParse(#[from] serde_json::Error),

    #[error("Forecast response contained no location")]
    NoLocation,

    #[error("Forecast response has no hourly variable '{0}'")]
    MissingVariable(String),

    #[error("Hourly time axis is not evenly spaced at index {index}: expected step {expected}s, found {found}s")]
    IrregularTimeAxis {
        index: usize,
        expected: i64,
        found: i64,
    },

    #[error("Hourly interval must be positive, got {0}s")]
    InvalidInterval(i64),

    #[error("Timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("Shape mismatch for {city}: {timestamps} timestamps but {values} values")]
    ShapeMismatch {
        city: String,
        timestamps: usize,
        values: usize,
    },

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode cache data from '{0}'")]
    CacheDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode cache data")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Failed to delete cache '{0}'")]
    CacheDeletion(PathBuf, #[source] std::io::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
