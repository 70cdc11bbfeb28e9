//! Lesson site client
//!
//! Fetches the homepage, follows the per-level pages of the most recent
//! lessons, and assembles [`Lesson`] values. All requests are blocking
//! with a fixed timeout; the caller decides whether to fall back to the
//! cache on failure.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::LessonCache;
use crate::error::{LessonError, Result};
use crate::extract::{
    extract_description, extract_lesson_links, extract_paragraphs, level_url,
};
use crate::lesson::Lesson;
use crate::{BASE_URL, LESSON_FETCH_COUNT, LEVELS};

/// Request timeout, matching the original client's 20 seconds.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Minimum combined text length for a level to count as usable.
const MIN_LEVEL_TEXT_LEN: usize = 100;

/// How many homepage links to consider before fetching level pages.
const LINK_SCAN_LIMIT: usize = 10;

pub struct LessonClient {
    http: reqwest::blocking::Client,
    base_url: String,
    cache: LessonCache,
}

impl LessonClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Client against an alternate site root (used by tests).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|source| LessonError::Network {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            cache: LessonCache::new(),
        })
    }

    /// Fetch lessons, preferring the fresh cache when asked.
    ///
    /// On network failure with `use_cache`, stale cached lessons are
    /// returned instead of the error so practice keeps working offline.
    pub fn fetch_lessons(&self, use_cache: bool) -> Result<Vec<Lesson>> {
        if use_cache {
            let cached = self.cache.load();
            if !cached.is_empty() {
                info!("Using {} cached lessons", cached.len());
                return Ok(cached);
            }
        }

        match self.fetch_fresh() {
            Ok(lessons) => {
                if !lessons.is_empty() {
                    if let Err(err) = self.cache.save(&lessons) {
                        warn!("Failed to cache lessons: {err}");
                    }
                }
                Ok(lessons)
            }
            Err(err) => {
                if use_cache {
                    let stale = self.cache.load_stale();
                    if !stale.is_empty() {
                        warn!("Network error ({err}), using stale cached lessons");
                        return Ok(stale);
                    }
                }
                Err(err)
            }
        }
    }

    /// Cached lessons of any age, without touching the network.
    pub fn cached_lessons(&self) -> Vec<Lesson> {
        self.cache.load_stale()
    }

    pub fn clear_cache(&self) -> Result<()> {
        self.cache.clear()
    }

    fn fetch_fresh(&self) -> Result<Vec<Lesson>> {
        info!("Fetching lessons from {}", self.base_url);
        let homepage = self.fetch_page(&self.base_url)?;
        let links = extract_lesson_links(&homepage, &self.base_url, LINK_SCAN_LIMIT);
        debug!("Found {} lesson links", links.len());

        let mut lessons = Vec::new();
        for link in links.into_iter().take(LESSON_FETCH_COUNT) {
            match self.fetch_lesson(&link.title, &link.url, &link.date) {
                Ok(Some(lesson)) => {
                    info!(
                        "Loaded: {} ({} levels)",
                        lesson.title,
                        lesson.levels.len()
                    );
                    lessons.push(lesson);
                }
                Ok(None) => debug!("No usable levels for {}", link.url),
                Err(err) => warn!("Failed to fetch lesson {}: {err}", link.url),
            }
        }

        if lessons.is_empty() {
            warn!("No lessons were extracted");
        }
        Ok(lessons)
    }

    /// Fetch every level page of one lesson; `None` when no level has
    /// enough readable text.
    fn fetch_lesson(&self, title: &str, url: &str, date: &str) -> Result<Option<Lesson>> {
        let mut lesson = Lesson {
            title: title.to_string(),
            url: url.to_string(),
            date: date.to_string(),
            description: String::new(),
            levels: Vec::new(),
            texts: Default::default(),
            level_urls: Default::default(),
            paragraphs: Default::default(),
        };

        for level in LEVELS {
            let page_url = level_url(url, level);
            let html = match self.fetch_page(&page_url) {
                Ok(html) => html,
                Err(err) => {
                    debug!("Level {level} unavailable: {err}");
                    continue;
                }
            };

            let paragraphs = extract_paragraphs(&html);
            let text = paragraphs.join(" ");
            if text.chars().count() < MIN_LEVEL_TEXT_LEN {
                continue;
            }

            if lesson.description.is_empty() {
                lesson.description = extract_description(&html);
            }
            lesson.levels.push(level.to_string());
            lesson.texts.insert(level.to_string(), text);
            lesson.level_urls.insert(level.to_string(), page_url);
            lesson.paragraphs.insert(level.to_string(), paragraphs);
        }

        if lesson.levels.is_empty() {
            return Ok(None);
        }
        Ok(Some(lesson))
    }

    fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|source| LessonError::Network {
                url: url.to_string(),
                source,
            })?;
        response.text().map_err(|source| LessonError::Network {
            url: url.to_string(),
            source,
        })
    }
}
