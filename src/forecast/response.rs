//! Typed view of the Open-Meteo forecast JSON and its reduction to an
//! evenly spaced hourly series.

use crate::forecast::error::ForecastError;
use crate::types::hourly_record::HourlyRecord;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Step assumed when the time axis has fewer than two points.
pub const DEFAULT_INTERVAL_SECS: i64 = 3600;

/// One location block of a forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationForecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub utc_offset_seconds: i64,
    pub hourly: Option<HourlyBlock>,
}

/// The `hourly` object: a unix-seconds time axis plus one array per variable.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<i64>,
    #[serde(flatten)]
    pub variables: HashMap<String, Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ForecastPayload {
    Many(Vec<LocationForecast>),
    One(LocationForecast),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    reason: String,
}

/// Parses a response body and returns the first location it describes.
pub fn parse_first_location(body: &str) -> Result<LocationForecast, ForecastError> {
    match serde_json::from_str::<ForecastPayload>(body)? {
        ForecastPayload::One(location) => Ok(location),
        ForecastPayload::Many(locations) => {
            locations.into_iter().next().ok_or(ForecastError::NoLocation)
        }
    }
}

/// Extracts the `reason` of an Open-Meteo error body, if the body is one.
pub fn parse_error_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.reason)
}

impl LocationForecast {
    /// Reduces the named hourly variable to an [`HourlySeries`].
    pub fn hourly_series(mut self, variable: &str) -> Result<HourlySeries, ForecastError> {
        let mut hourly = self
            .hourly
            .take()
            .ok_or_else(|| ForecastError::MissingVariable(variable.to_string()))?;
        let values = hourly
            .variables
            .remove(variable)
            .ok_or_else(|| ForecastError::MissingVariable(variable.to_string()))?;
        HourlySeries::from_time_axis(&hourly.time, values)
    }
}

/// A single hourly variable: values for each step of `[start, end)` at `interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub interval: TimeDelta,
    pub values: Vec<Option<f64>>,
}

impl HourlySeries {
    /// Builds a series from an explicit unix-seconds time axis.
    ///
    /// The axis must be evenly spaced. Its first step sets the interval and `end`
    /// lies one interval past the last timestamp.
    pub fn from_time_axis(time: &[i64], values: Vec<Option<f64>>) -> Result<Self, ForecastError> {
        let interval = match time {
            [first, second, ..] => second - first,
            _ => DEFAULT_INTERVAL_SECS,
        };
        if interval <= 0 {
            return Err(ForecastError::InvalidInterval(interval));
        }

        if let Some((index, found)) = time
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .enumerate()
            .find(|(_, step)| *step != interval)
        {
            return Err(ForecastError::IrregularTimeAxis {
                index: index + 1,
                expected: interval,
                found,
            });
        }

        let (start, end) = match (time.first(), time.last()) {
            (Some(&first), Some(&last)) => {
                let end_secs = last
                    .checked_add(interval)
                    .ok_or(ForecastError::InvalidTimestamp(last))?;
                (to_datetime(first)?, to_datetime(end_secs)?)
            }
            _ => (DateTime::<Utc>::UNIX_EPOCH, DateTime::<Utc>::UNIX_EPOCH),
        };

        Ok(Self {
            start,
            end,
            interval: TimeDelta::seconds(interval),
            values,
        })
    }

    /// Every timestamp in `[start, end)`, ascending.
    pub fn timestamps(&self) -> Result<Vec<DateTime<Utc>>, ForecastError> {
        if self.interval <= TimeDelta::zero() {
            return Err(ForecastError::InvalidInterval(self.interval.num_seconds()));
        }
        Ok(
            std::iter::successors(Some(self.start), |t| t.checked_add_signed(self.interval))
                .take_while(|t| *t < self.end)
                .collect(),
        )
    }

    /// Pairs each timestamp with its value and tags the rows with `city`.
    pub fn into_records(self, city: &str) -> Result<Vec<HourlyRecord>, ForecastError> {
        let timestamps = self.timestamps()?;
        if timestamps.len() != self.values.len() {
            return Err(ForecastError::ShapeMismatch {
                city: city.to_string(),
                timestamps: timestamps.len(),
                values: self.values.len(),
            });
        }

        Ok(timestamps
            .into_iter()
            .zip(self.values)
            .map(|(date, temperature)| HourlyRecord::new(date, temperature, city))
            .collect())
    }
}

fn to_datetime(secs: i64) -> Result<DateTime<Utc>, ForecastError> {
    DateTime::from_timestamp(secs, 0).ok_or(ForecastError::InvalidTimestamp(secs))
}
