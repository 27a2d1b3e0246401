use crate::forecast::error::ForecastError;
use bincode::config::{Configuration, Fixint, LittleEndian};
use chrono::{DateTime, TimeDelta, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// A successful response body as it was stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub fetched_at: DateTime<Utc>,
    pub status: u16,
    pub body: String,
}

impl CachedResponse {
    fn is_fresh(&self, now: DateTime<Utc>, expire_after: Duration) -> bool {
        let age = now - self.fetched_at;
        // an expiry too large for TimeDelta never runs out
        age >= TimeDelta::zero() && TimeDelta::from_std(expire_after).map_or(true, |e| age < e)
    }
}

/// Response cache backed by a single bincode file, keyed by full request URL.
///
/// The whole map is loaded once and rewritten after every insert. Entries older
/// than `expire_after` are never served and get dropped on the next write.
#[derive(Debug)]
pub struct ResponseCache {
    path: PathBuf,
    expire_after: Duration,
    entries: HashMap<String, CachedResponse>,
}

impl ResponseCache {
    pub async fn load(path: &Path, expire_after: Duration) -> Result<Self, ForecastError> {
        let entries = if tokio::fs::try_exists(path)
            .await
            .map_err(|e| ForecastError::CacheRead(path.to_path_buf(), e))?
        {
            let path_clone = path.to_path_buf();
            tokio::task::spawn_blocking(move || Self::read_entries(&path_clone)).await??
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            expire_after,
            entries,
        })
    }

    fn read_entries(path: &Path) -> Result<HashMap<String, CachedResponse>, ForecastError> {
        let bytes =
            std::fs::read(path).map_err(|e| ForecastError::CacheRead(path.to_path_buf(), e))?;
        let (entries, _) = bincode::serde::decode_from_slice(&bytes, BINCODE_CONFIG)
            .map_err(|e| ForecastError::CacheDecode(path.to_path_buf(), Box::new(e)))?;
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored response for `key` if it has not expired at `now`.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&CachedResponse> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.expire_after))
    }

    /// Stores a response and rewrites the cache file.
    pub async fn insert(
        &mut self,
        key: String,
        response: CachedResponse,
        now: DateTime<Utc>,
    ) -> Result<(), ForecastError> {
        let expire_after = self.expire_after;
        self.entries
            .retain(|_, entry| entry.is_fresh(now, expire_after));
        self.entries.insert(key, response);
        self.persist().await
    }

    async fn persist(&self) -> Result<(), ForecastError> {
        let bytes = bincode::serde::encode_to_vec(&self.entries, BINCODE_CONFIG)
            .map_err(|e| ForecastError::CacheEncode(Box::new(e)))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ForecastError::CacheDirCreation(dir.clone(), e))?;

        let path = self.path.clone();
        let written = bytes.len();
        tokio::task::spawn_blocking(move || {
            let mut file = NamedTempFile::new_in(&dir)
                .map_err(|e| ForecastError::CacheWrite(path.clone(), e))?;
            file.write_all(&bytes)
                .map_err(|e| ForecastError::CacheWrite(path.clone(), e))?;
            file.persist(&path)
                .map_err(|e| ForecastError::CacheWrite(path.clone(), e.error))?;
            Ok::<(), ForecastError>(())
        })
        .await??;

        info!(
            "Wrote {} cached responses ({} bytes) to {}",
            self.entries.len(),
            written,
            self.path.display()
        );
        Ok(())
    }

    /// Drops every entry and deletes the cache file.
    pub async fn clear(&mut self) -> Result<(), ForecastError> {
        self.entries.clear();
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ForecastError::CacheDeletion(self.path.clone(), e)),
        }
    }
}
