use crate::forecast::client::ForecastClient;
use crate::forecast::error::ForecastError;
use crate::forecast::response::parse_first_location;
use crate::types::hourly_record::HourlyRecord;
use log::debug;

/// The hourly variable requested for every city.
pub const HOURLY_VARIABLE: &str = "temperature_2m";

/// Fetches the hourly temperature forecast at the given coordinates.
///
/// Coordinates are passed to the API as-is; out-of-range values come back as
/// [`ForecastError::Api`]. `city_name` only labels the returned rows.
///
/// The records cover `[start, end)` of the response's time axis, one per
/// interval, in ascending order.
///
/// # Errors
///
/// Any transport, API, decoding or shape error is returned unchanged. A
/// response whose value count differs from its timestamp count yields
/// [`ForecastError::ShapeMismatch`].
pub async fn fetch(
    client: &ForecastClient,
    latitude: f64,
    longitude: f64,
    city_name: &str,
) -> Result<Vec<HourlyRecord>, ForecastError> {
    let params = [
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
        ("hourly", HOURLY_VARIABLE.to_string()),
        ("timeformat", "unixtime".to_string()),
    ];

    client
        .get_decoded(&params, |body| {
            let series = parse_first_location(body)?.hourly_series(HOURLY_VARIABLE)?;
            debug!(
                "{}: {} values from {} to {} every {}s",
                city_name,
                series.values.len(),
                series.start,
                series.end,
                series.interval.num_seconds()
            );
            series.into_records(city_name)
        })
        .await
}
