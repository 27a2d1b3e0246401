//! Retrieval of hourly forecasts from the Open-Meteo API.

pub mod cache;
pub mod client;
pub mod error;
pub mod fetch;
pub mod response;
pub mod retry;
