//! Lesson data model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A graded reading lesson.
///
/// Each level ("0".."6") carries the full article text plus the same text
/// pre-split into paragraphs for paragraph-by-paragraph practice.
/// Consumed read-only by the practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub url: String,
    /// Publication date as shown on the site, `DD/MM/YY`, may be empty.
    pub date: String,
    pub description: String,
    /// Levels that actually have content, ascending.
    pub levels: Vec<String>,
    /// Full article text per level.
    pub texts: BTreeMap<String, String>,
    /// Source page per level.
    pub level_urls: BTreeMap<String, String>,
    /// Article paragraphs per level, in reading order.
    pub paragraphs: BTreeMap<String, Vec<String>>,
}

impl Lesson {
    pub fn text(&self, level: &str) -> Option<&str> {
        self.texts.get(level).map(String::as_str)
    }

    /// Paragraphs for a level; empty when the level is unknown.
    pub fn paragraphs(&self, level: &str) -> &[String] {
        self.paragraphs.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn level_url(&self, level: &str) -> Option<&str> {
        self.level_urls.get(level).map(String::as_str)
    }

    pub fn has_level(&self, level: &str) -> bool {
        !self.paragraphs(level).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_lesson() -> Lesson {
        let mut texts = BTreeMap::new();
        texts.insert("3".to_string(), "First sentence. Second sentence.".to_string());
        let mut level_urls = BTreeMap::new();
        level_urls.insert(
            "3".to_string(),
            "https://example.com/lesson-3.html".to_string(),
        );
        let mut paragraphs = BTreeMap::new();
        paragraphs.insert(
            "3".to_string(),
            vec!["First sentence.".to_string(), "Second sentence.".to_string()],
        );
        Lesson {
            title: "Sample lesson".to_string(),
            url: "https://example.com/lesson.html".to_string(),
            date: "01/02/25".to_string(),
            description: "A sample".to_string(),
            levels: vec!["3".to_string()],
            texts,
            level_urls,
            paragraphs,
        }
    }

    #[test]
    fn level_accessors() {
        let lesson = sample_lesson();
        assert!(lesson.has_level("3"));
        assert!(!lesson.has_level("0"));
        assert_eq!(lesson.paragraphs("3").len(), 2);
        assert!(lesson.paragraphs("9").is_empty());
        assert_eq!(lesson.text("3"), Some("First sentence. Second sentence."));
        assert_eq!(lesson.text("0"), None);
    }

    #[test]
    fn serde_round_trip() {
        let lesson = sample_lesson();
        let json = serde_json::to_string(&lesson).unwrap();
        let back: Lesson = serde_json::from_str(&json).unwrap();
        assert_eq!(lesson, back);
    }
}
