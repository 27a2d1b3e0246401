mod cli;

use anyhow::{Context, Result};
use baltic_weather::{run, ForecastClient};
use clap::Parser;
use cli::Cli;
use env_logger::Env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let client = ForecastClient::builder()
        .maybe_base_url(cli.base_url.clone())
        .maybe_cache_path(cli.cache_path.clone())
        .maybe_expire_after(cli.expire_after())
        .build()
        .await
        .context("Failed to set up forecast client")?;

    run(&client, &cli.run_config()).await?;

    Ok(())
}
