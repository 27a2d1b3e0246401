//! Hourly temperature forecasts for the Baltic capitals from Open-Meteo,
//! combined into one CSV file.
//!
//! ```no_run
//! use baltic_weather::{run, ForecastClient, RunConfig};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ForecastClient::builder().build().await?;
//! let config = RunConfig::new(Path::new("."), None);
//! let written = run(&client, &config).await?;
//! println!("{}", written.display());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod forecast;
mod run;
mod table;
mod types;

pub use config::{default_cache_path, DataDirs, RunConfig, DEFAULT_OUTPUT_FILE};
pub use error::BalticWeatherError;
pub use run::{run, run_cities};

pub use forecast::cache::{CachedResponse, ResponseCache};
pub use forecast::client::{
    ForecastClient, DEFAULT_EXPIRE_AFTER, DEFAULT_TIMEOUT, OPEN_METEO_FORECAST_URL,
};
pub use forecast::error::ForecastError;
pub use forecast::fetch::{fetch, HOURLY_VARIABLE};
pub use forecast::response::{parse_first_location, HourlyBlock, HourlySeries, LocationForecast};
pub use forecast::retry::RetryPolicy;

pub use table::error::TableError;
pub use table::{concat, records_to_frame, write_csv, CSV_DATETIME_FORMAT};

pub use types::city::{City, BALTIC_CAPITALS};
pub use types::hourly_record::HourlyRecord;
