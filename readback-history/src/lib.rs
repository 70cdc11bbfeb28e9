//! Persistent history of transcriptions and practice attempts.
//!
//! Entries accumulate in memory and are flushed to a JSON file with
//! [`HistoryLog::save`], which appends to whatever is already on disk.
//! The file lives at `~/.config/readback/history.json` by default.

mod error;
mod log;

pub use error::{HistoryError, Result};
pub use log::{HistoryEntry, HistoryLog, HistoryStats};
