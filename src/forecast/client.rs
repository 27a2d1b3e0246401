use crate::config::default_cache_path;
use crate::forecast::cache::{CachedResponse, ResponseCache};
use crate::forecast::error::ForecastError;
use crate::forecast::response::parse_error_reason;
use crate::forecast::retry::RetryPolicy;
use bon::bon;
use chrono::Utc;
use log::{debug, warn};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Mutex;

pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_EXPIRE_AFTER: Duration = Duration::from_secs(3600);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the forecast API with a response cache and retry in front.
///
/// Build one per run and hand it to every [`crate::fetch`] call so all cities
/// share the same cache.
///
/// # Examples
///
/// ```no_run
/// # use baltic_weather::{ForecastClient, ForecastError};
/// # use std::path::PathBuf;
/// # async fn run() -> Result<(), ForecastError> {
/// let client = ForecastClient::builder()
///     .cache_path(PathBuf::from(".cache/http_cache.bin"))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ForecastClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
    cache: Mutex<ResponseCache>,
}

#[bon]
impl ForecastClient {
    /// Creates a client, loading any existing cache file.
    ///
    /// All arguments are optional:
    ///
    /// * `base_url` - forecast endpoint, defaults to [`OPEN_METEO_FORECAST_URL`].
    /// * `cache_path` - cache file, defaults to [`default_cache_path`].
    /// * `expire_after` - cache entry lifetime, defaults to one hour.
    /// * `retry` - defaults to five attempts with a 0.2s backoff factor.
    /// * `timeout` - per-request timeout, defaults to 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::ClientBuild`] if the HTTP client cannot be built and
    /// [`ForecastError::CacheRead`] / [`ForecastError::CacheDecode`] if an existing
    /// cache file cannot be read.
    #[builder]
    pub async fn new(
        base_url: Option<String>,
        cache_path: Option<PathBuf>,
        expire_after: Option<Duration>,
        retry: Option<RetryPolicy>,
        timeout: Option<Duration>,
    ) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ForecastError::ClientBuild)?;
        let cache_path = cache_path.unwrap_or_else(default_cache_path);
        let cache =
            ResponseCache::load(&cache_path, expire_after.unwrap_or(DEFAULT_EXPIRE_AFTER)).await?;

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| OPEN_METEO_FORECAST_URL.to_string()),
            retry: retry.unwrap_or_default(),
            cache: Mutex::new(cache),
        })
    }

    /// Deletes the cache file and forgets every stored response.
    pub async fn clear_cache(&self) -> Result<(), ForecastError> {
        self.cache.lock().await.clear().await
    }

    /// GETs the endpoint with `params` and runs `decode` over the response body.
    ///
    /// A fresh cached body for the same URL is decoded without touching the
    /// network. Otherwise the request goes out under the retry policy. Only a
    /// successful body that `decode` accepts is written to the cache.
    pub async fn get_decoded<T, F>(
        &self,
        params: &[(&str, String)],
        decode: F,
    ) -> Result<T, ForecastError>
    where
        F: FnOnce(&str) -> Result<T, ForecastError>,
    {
        let url = self
            .http
            .get(&self.base_url)
            .query(params)
            .build()
            .map_err(|e| ForecastError::NetworkRequest(self.base_url.clone(), e))?
            .url()
            .clone();
        let key = url.to_string();

        {
            let cache = self.cache.lock().await;
            if let Some(hit) = cache.get(&key, Utc::now()) {
                debug!("Cache hit for {}", key);
                return decode(&hit.body);
            }
        }

        warn!("Cache miss for {}. Requesting from API.", key);
        let response = self
            .retry
            .execute(|| self.http.get(url.clone()).send())
            .await
            .map_err(|e| ForecastError::NetworkRequest(key.clone(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ForecastError::NetworkRequest(key.clone(), e))?;

        if !status.is_success() {
            let reason = parse_error_reason(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            return Err(ForecastError::Api {
                url: key,
                status,
                reason,
            });
        }

        let decoded = decode(&body)?;

        let now = Utc::now();
        let entry = CachedResponse {
            fetched_at: now,
            status: status.as_u16(),
            body,
        };
        self.cache.lock().await.insert(key, entry, now).await?;

        Ok(decoded)
    }
}

impl std::fmt::Debug for ForecastClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastClient")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

