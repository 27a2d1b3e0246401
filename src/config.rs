//! Filesystem layout for a run: data directories, output file and cache file.

use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "baltic_weather";
const CACHE_FILE_NAME: &str = "http_cache.bin";
pub const DEFAULT_OUTPUT_FILE: &str = "baltic_capitals_weather.csv";

/// Default location of the HTTP response cache file.
///
/// Uses the platform cache directory (e.g. `~/.cache/baltic_weather` on Linux)
/// and falls back to `./.cache` when there is none.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join(CACHE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join(CACHE_FILE_NAME)
}

/// The `data/raw` and `data/processed` directories under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirs {
    pub raw: PathBuf,
    pub processed: PathBuf,
}

impl DataDirs {
    pub fn from_root(root: &Path) -> Self {
        let data = root.join("data");
        Self {
            raw: data.join("raw"),
            processed: data.join("processed"),
        }
    }

    pub fn default_output_path(&self) -> PathBuf {
        self.raw.join(DEFAULT_OUTPUT_FILE)
    }
}

/// Where a run reads its layout from and writes its output to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dirs: DataDirs,
    pub output_path: PathBuf,
}

impl RunConfig {
    /// Layout under `root`; `output_path` defaults to the raw data directory.
    pub fn new(root: &Path, output_path: Option<PathBuf>) -> Self {
        let dirs = DataDirs::from_root(root);
        let output_path = output_path.unwrap_or_else(|| dirs.default_output_path());
        Self { dirs, output_path }
    }
}

/// Creates `path` (and parents) unless it already is a directory.
pub async fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists but is not a directory", path.display()),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => tokio::fs::create_dir_all(path).await,
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_under_root() {
        let config = RunConfig::new(Path::new("/srv/project"), None);
        assert_eq!(config.dirs.raw, PathBuf::from("/srv/project/data/raw"));
        assert_eq!(
            config.dirs.processed,
            PathBuf::from("/srv/project/data/processed")
        );
        assert_eq!(
            config.output_path,
            PathBuf::from("/srv/project/data/raw/baltic_capitals_weather.csv")
        );
    }

    #[test]
    fn test_explicit_output_path() {
        let config = RunConfig::new(Path::new("."), Some(PathBuf::from("out/weather.csv")));
        assert_eq!(config.output_path, PathBuf::from("out/weather.csv"));
    }

    #[test]
    fn test_default_cache_path_file_name() {
        assert!(default_cache_path().ends_with("http_cache.bin"));
    }

    #[tokio::test]
    async fn test_ensure_dir_exists() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");

        ensure_dir_exists(&dir).await.unwrap();
        assert!(dir.is_dir());
        // second call is a no-op
        ensure_dir_exists(&dir).await.unwrap();

        let file = tmp.path().join("file");
        std::fs::write(&file, "x").unwrap();
        assert!(ensure_dir_exists(&file).await.is_err());
    }
}
