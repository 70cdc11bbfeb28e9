//! History log storage

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HistoryError, Result};

/// One recorded transcription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    /// ISO 639-1 code, e.g. "en".
    pub language: String,
    /// Recording length in seconds.
    pub duration: u32,
    pub text: String,
}

impl HistoryEntry {
    pub fn new<L: Into<String>, T: Into<String>>(language: L, duration: u32, text: T) -> Self {
        Self {
            timestamp: Utc::now(),
            language: language.into(),
            duration,
            text: text.into(),
        }
    }
}

/// Summary over the full on-disk history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStats {
    pub total: usize,
    pub total_duration: u64,
    pub by_language: BTreeMap<String, usize>,
}

/// Buffered history writer.
///
/// New entries accumulate in memory; `save` merges them into the file
/// so concurrent sessions never overwrite each other's past entries.
pub struct HistoryLog {
    file: PathBuf,
    pending: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Log at the standard location, `~/.config/readback/history.json`.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir().ok_or(HistoryError::NoConfigDir)?;
        Ok(Self::at_path(config_dir.join("readback").join("history.json")))
    }

    /// Log at an explicit path.
    pub fn at_path<P: Into<PathBuf>>(file: P) -> Self {
        Self {
            file: file.into(),
            pending: Vec::new(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Number of entries waiting to be saved.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Buffer a new entry. Blank transcripts are dropped.
    pub fn add(&mut self, entry: HistoryEntry) {
        if entry.text.trim().is_empty() {
            return;
        }
        self.pending.push(entry);
    }

    /// Append pending entries to the file and clear the buffer.
    pub fn save(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let mut entries = self.load_all()?;
        entries.append(&mut self.pending);

        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.file.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp, &self.file)?;
        Ok(())
    }

    /// All entries currently on disk. A corrupt file is treated as
    /// empty so one bad write never bricks the history.
    pub fn load_all(&self) -> Result<Vec<HistoryEntry>> {
        let data = match fs::read_to_string(&self.file) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!("History file corrupt, starting fresh: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Delete the history file and any buffered entries.
    pub fn clear_all(&mut self) -> Result<()> {
        self.pending.clear();
        match fs::remove_file(&self.file) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Totals over the on-disk history (pending entries excluded).
    pub fn stats(&self) -> Result<HistoryStats> {
        let entries = self.load_all()?;
        let mut stats = HistoryStats {
            total: entries.len(),
            ..Default::default()
        };
        for entry in &entries {
            stats.total_duration += u64::from(entry.duration);
            *stats.by_language.entry(entry.language.clone()).or_insert(0) += 1;
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn log_in(dir: &TempDir) -> HistoryLog {
        HistoryLog::at_path(dir.path().join("history.json"))
    }

    #[test]
    fn save_appends_and_clears_buffer() {
        let dir = TempDir::new().unwrap();
        let mut log = log_in(&dir);

        log.add(HistoryEntry::new("en", 15, "first take"));
        log.save().unwrap();
        assert_eq!(log.pending_count(), 0);

        log.add(HistoryEntry::new("es", 30, "segunda toma"));
        log.save().unwrap();

        let entries = log.load_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "first take");
        assert_eq!(entries[1].language, "es");
    }

    #[test]
    fn blank_entries_are_dropped() {
        let dir = TempDir::new().unwrap();
        let mut log = log_in(&dir);
        log.add(HistoryEntry::new("en", 15, "   "));
        log.add(HistoryEntry::new("en", 15, ""));
        assert_eq!(log.pending_count(), 0);
        log.save().unwrap();
        assert!(log.load_all().unwrap().is_empty());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        assert!(log.load_all().unwrap().is_empty());
        assert_eq!(log.stats().unwrap(), HistoryStats::default());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        fs::write(log.file(), "{not json").unwrap();
        assert!(log.load_all().unwrap().is_empty());
    }

    #[test]
    fn stats_count_per_language_and_duration() {
        let dir = TempDir::new().unwrap();
        let mut log = log_in(&dir);
        log.add(HistoryEntry::new("en", 15, "one"));
        log.add(HistoryEntry::new("en", 20, "two"));
        log.add(HistoryEntry::new("es", 30, "tres"));
        log.save().unwrap();

        let stats = log.stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_duration, 65);
        assert_eq!(stats.by_language.get("en"), Some(&2));
        assert_eq!(stats.by_language.get("es"), Some(&1));
    }

    #[test]
    fn clear_all_removes_file_and_buffer() {
        let dir = TempDir::new().unwrap();
        let mut log = log_in(&dir);
        log.add(HistoryEntry::new("en", 15, "soon gone"));
        log.save().unwrap();

        log.add(HistoryEntry::new("en", 15, "never saved"));
        log.clear_all().unwrap();
        assert_eq!(log.pending_count(), 0);
        assert!(log.load_all().unwrap().is_empty());

        // Clearing twice is fine.
        log.clear_all().unwrap();
    }
}
