//! Readback Lessons
//!
//! Fetches graded reading lessons from Breaking News English, extracts the
//! readable article text per difficulty level, and keeps a 24-hour JSON
//! cache so practice mode works offline.
//!
//! The practice core never touches this crate's I/O: it only consumes
//! fully-formed [`Lesson`] values.

pub mod cache;
pub mod client;
pub mod error;
pub mod extract;
pub mod lesson;

pub use cache::LessonCache;
pub use client::LessonClient;
pub use error::{LessonError, Result};
pub use lesson::Lesson;

/// Lesson site root.
pub const BASE_URL: &str = "https://breakingnewsenglish.com";

/// Difficulty levels published per lesson ("0" easiest .. "6" hardest).
pub const LEVELS: [&str; 7] = ["0", "1", "2", "3", "4", "5", "6"];

/// How many lessons one refresh fetches level pages for.
pub const LESSON_FETCH_COUNT: usize = 6;
