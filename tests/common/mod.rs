#![allow(dead_code)]

use baltic_weather::{ForecastClient, RetryPolicy};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;
use wiremock::MockServer;

/// 2024-01-01T00:00:00Z
pub const JAN_1: i64 = 1_704_067_200;

pub const FORECAST_PATH: &str = "/v1/forecast";

/// An Open-Meteo style body with `values.len()` hourly steps from `start`.
pub fn forecast_body(latitude: f64, longitude: f64, start: i64, values: &[f64]) -> Value {
    let time: Vec<i64> = (0..values.len() as i64).map(|i| start + i * 3600).collect();
    json!({
        "latitude": latitude,
        "longitude": longitude,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 20.0,
        "hourly_units": {"time": "unixtime", "temperature_2m": "°C"},
        "hourly": {"time": time, "temperature_2m": values}
    })
}

pub fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(5, Duration::from_millis(1))
}

pub async fn client_for(server: &MockServer, cache_path: &Path) -> ForecastClient {
    ForecastClient::builder()
        .base_url(format!("{}{}", server.uri(), FORECAST_PATH))
        .cache_path(cache_path.to_path_buf())
        .retry(fast_retry())
        .build()
        .await
        .unwrap()
}
