//! Environment/runtime helpers
//!
//! Sanity checks run before the database is opened.

use std::path::{Path, PathBuf};

use tracing::info;

/// Filesystem path of an SQLite URL, or `None` for in-memory databases.
///
/// Accepts `sqlite://path`, `sqlite:path` and strips any `?query` suffix.
pub fn sqlite_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with("file::memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Make sure the directory holding the database file exists so `mode=rwc`
/// can create the file on first start.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_path(url) else { return Ok(()) };
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else { return Ok(()) };
    if tokio::fs::metadata(dir).await.is_err() {
        info!(dir = %dir.display(), "creating database directory");
    }
    create_dir(dir).await
}

async fn create_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_have_no_path() {
        assert_eq!(sqlite_path("sqlite::memory:"), None);
        assert_eq!(sqlite_path("sqlite://:memory:"), None);
        assert_eq!(sqlite_path("postgres://x"), None);
    }

    #[test]
    fn file_urls_strip_query() {
        assert_eq!(sqlite_path("sqlite://heroes.db?mode=rwc"), Some(PathBuf::from("heroes.db")));
        assert_eq!(sqlite_path("sqlite:data/heroes.db"), Some(PathBuf::from("data/heroes.db")));
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("heroes-env-{}", std::process::id()));
        let url = format!("sqlite://{}/heroes.db?mode=rwc", dir.display());
        ensure_sqlite_dir(&url).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
