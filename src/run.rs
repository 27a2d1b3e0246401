//! The end-to-end run: fetch every city in turn, then write one CSV.

use crate::config::{ensure_dir_exists, RunConfig};
use crate::error::BalticWeatherError;
use crate::forecast::client::ForecastClient;
use crate::forecast::fetch::fetch;
use crate::table::{concat, records_to_frame, write_csv};
use crate::types::city::{City, BALTIC_CAPITALS};
use log::info;
use std::path::{Path, PathBuf};
use tokio::task;

/// Fetches the Baltic capitals and writes the combined CSV.
///
/// Returns the path written to. The first failing city aborts the run before
/// anything is written.
pub async fn run(client: &ForecastClient, config: &RunConfig) -> Result<PathBuf, BalticWeatherError> {
    info!("Fetching and processing weather data for Baltic capitals...");
    run_cities(client, &BALTIC_CAPITALS, config).await
}

/// Same as [`run`] over an arbitrary list of cities, fetched in slice order.
pub async fn run_cities(
    client: &ForecastClient,
    cities: &[City],
    config: &RunConfig,
) -> Result<PathBuf, BalticWeatherError> {
    create_dir(&config.dirs.raw).await?;
    create_dir(&config.dirs.processed).await?;

    let mut frames = Vec::with_capacity(cities.len());
    for city in cities {
        info!("Fetching data for {}...", city.name);
        let records = fetch(client, city.latitude, city.longitude, city.name)
            .await
            .map_err(|source| BalticWeatherError::CityFetch {
                city: city.name.to_string(),
                source,
            })?;
        frames.push(records_to_frame(&records)?);
        info!("Data fetched for {} ({} rows).", city.name, records.len());
    }

    let mut combined = concat(frames)?;

    let output_path = config.output_path.clone();
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent).await?;
    }

    let path = output_path.clone();
    task::spawn_blocking(move || write_csv(&mut combined, &path)).await??;

    info!(
        "Processing complete. Data saved to {}",
        output_path.display()
    );
    Ok(output_path)
}

async fn create_dir(path: &Path) -> Result<(), BalticWeatherError> {
    ensure_dir_exists(path)
        .await
        .map_err(|e| BalticWeatherError::DataDirCreation(path.to_path_buf(), e))
}
