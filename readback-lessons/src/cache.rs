//! On-disk lesson cache
//!
//! A single JSON index file under the user config directory. Writes go
//! through a temp file and an atomic rename so a crash mid-save never
//! leaves a truncated index behind.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LessonError, Result};
use crate::lesson::Lesson;

/// Cached lessons older than this are treated as absent on a normal load.
const MAX_AGE_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
struct CacheIndex {
    timestamp: DateTime<Utc>,
    lessons: Vec<Lesson>,
}

/// JSON-file lesson cache with a 24-hour freshness window.
pub struct LessonCache {
    index_file: PathBuf,
}

impl LessonCache {
    /// Cache at the default location
    /// (`<config_dir>/readback/lessons/index.json`).
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("readback")
            .join("lessons");
        Self::at_dir(dir)
    }

    /// Cache rooted at an explicit directory (used by tests).
    pub fn at_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            index_file: dir.as_ref().join("index.json"),
        }
    }

    /// Persist the full lesson set, replacing any previous index.
    pub fn save(&self, lessons: &[Lesson]) -> Result<()> {
        let parent = self
            .index_file
            .parent()
            .ok_or_else(|| LessonError::Cache("index file has no parent directory".into()))?;
        std::fs::create_dir_all(parent)?;

        let index = CacheIndex {
            timestamp: Utc::now(),
            lessons: lessons.to_vec(),
        };

        let tmp = self.index_file.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(&index)?)?;
        std::fs::rename(&tmp, &self.index_file)?;

        debug!("Cached {} lessons to {}", lessons.len(), self.index_file.display());
        Ok(())
    }

    /// Load cached lessons if the index exists and is fresh.
    ///
    /// Returns an empty vec for a missing or expired index; a corrupt
    /// index is also treated as empty (it will be overwritten by the next
    /// refresh) rather than failing the caller.
    pub fn load(&self) -> Vec<Lesson> {
        self.load_with_max_age(Some(Duration::hours(MAX_AGE_HOURS)))
    }

    /// Load cached lessons regardless of age (offline fallback).
    pub fn load_stale(&self) -> Vec<Lesson> {
        self.load_with_max_age(None)
    }

    fn load_with_max_age(&self, max_age: Option<Duration>) -> Vec<Lesson> {
        let contents = match std::fs::read_to_string(&self.index_file) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };

        let index: CacheIndex = match serde_json::from_str(&contents) {
            Ok(index) => index,
            Err(err) => {
                warn!("Ignoring corrupt lesson cache: {err}");
                return Vec::new();
            }
        };

        if let Some(max_age) = max_age {
            let age = Utc::now() - index.timestamp;
            if age > max_age {
                info!("Lesson cache is older than {MAX_AGE_HOURS}h, ignoring");
                return Vec::new();
            }
        }

        index.lessons
    }

    /// Delete the cache index.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.index_file) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for LessonCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn lesson(title: &str) -> Lesson {
        Lesson {
            title: title.to_string(),
            url: format!("https://example.com/{title}.html"),
            date: String::new(),
            description: String::new(),
            levels: vec!["3".to_string()],
            texts: BTreeMap::new(),
            level_urls: BTreeMap::new(),
            paragraphs: BTreeMap::new(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let cache = LessonCache::at_dir(dir.path());

        cache.save(&[lesson("one"), lesson("two")]).unwrap();
        let loaded = cache.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "one");
    }

    #[test]
    fn missing_index_loads_empty() {
        let dir = tempdir().unwrap();
        let cache = LessonCache::at_dir(dir.path());
        assert!(cache.load().is_empty());
        assert!(cache.load_stale().is_empty());
    }

    #[test]
    fn corrupt_index_loads_empty() {
        let dir = tempdir().unwrap();
        let cache = LessonCache::at_dir(dir.path());
        std::fs::write(dir.path().join("index.json"), b"not json").unwrap();
        assert!(cache.load().is_empty());
    }

    #[test]
    fn expired_index_loads_empty_but_stale_load_works() {
        let dir = tempdir().unwrap();
        let cache = LessonCache::at_dir(dir.path());
        let index = CacheIndex {
            timestamp: Utc::now() - Duration::hours(MAX_AGE_HOURS + 1),
            lessons: vec![lesson("old")],
        };
        std::fs::write(
            dir.path().join("index.json"),
            serde_json::to_vec(&index).unwrap(),
        )
        .unwrap();

        assert!(cache.load().is_empty());
        assert_eq!(cache.load_stale().len(), 1);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let cache = LessonCache::at_dir(dir.path());
        cache.clear().unwrap();
        cache.save(&[lesson("one")]).unwrap();
        cache.clear().unwrap();
        assert!(cache.load().is_empty());
    }
}
