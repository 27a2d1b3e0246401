use chrono::{DateTime, Utc};

/// One hour of forecast for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    /// Start of the hour, UTC.
    pub date: DateTime<Utc>,
    /// Air temperature 2m above ground in °C; `None` where the API reported null.
    pub temperature_2m: Option<f64>,
    pub city: String,
}

impl HourlyRecord {
    pub fn new(date: DateTime<Utc>, temperature_2m: Option<f64>, city: &str) -> Self {
        Self {
            date,
            temperature_2m,
            city: city.to_string(),
        }
    }
}
