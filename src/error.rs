use crate::forecast::error::ForecastError;
use crate::table::error::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BalticWeatherError {
    #[error("Failed to fetch forecast for {city}")]
    CityFetch {
        city: String,
        #[source]
        source: ForecastError,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to create data directory '{0}'")]
    DataDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
