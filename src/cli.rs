//! Command line interface.

use baltic_weather::RunConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Fetch hourly temperature forecasts for Tallinn, Riga and Vilnius into one CSV
pub struct Cli {
    /// CSV file to write [default: <DATA_ROOT>/data/raw/baltic_capitals_weather.csv]
    pub output_path: Option<PathBuf>,

    /// Project root holding the data/raw and data/processed directories
    #[arg(long, env = "BALTIC_WEATHER_ROOT", default_value = ".")]
    pub data_root: PathBuf,

    /// HTTP response cache file [default: platform cache dir]
    #[arg(long)]
    pub cache_path: Option<PathBuf>,

    /// Forecast API endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seconds a cached response stays valid
    #[arg(long)]
    pub expire_after_secs: Option<u64>,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.data_root, self.output_path.clone())
    }

    pub fn expire_after(&self) -> Option<Duration> {
        self.expire_after_secs.map(Duration::from_secs)
    }
}
