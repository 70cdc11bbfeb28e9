//! Practice session state machine

use serde::Serialize;

use readback_compare::{compare, ComparisonResult};
use readback_lessons::Lesson;

use crate::error::SessionError;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The cursor points at a paragraph not yet attempted.
    AwaitingParagraph,
    /// The last attempt is scored; waiting for retry/advance.
    AwaitingRetryDecision,
    /// The cursor moved past the last paragraph.
    Finished,
}

/// One practice run through a lesson level.
///
/// The lesson is held read-only; all mutation is the cursor, the state
/// tag, and the stored result of the latest attempt.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    lesson: Lesson,
    level: String,
    cursor: usize,
    state: SessionState,
    last_result: Option<ComparisonResult>,
}

impl PracticeSession {
    /// Begin a session over `level` of `lesson`, cursor at paragraph 0.
    pub fn start(lesson: Lesson, level: &str) -> Result<Self, SessionError> {
        if lesson.paragraphs(level).is_empty() {
            return Err(SessionError::InvalidLevel {
                level: level.to_string(),
            });
        }
        Ok(Self {
            lesson,
            level: level.to_string(),
            cursor: 0,
            state: SessionState::AwaitingParagraph,
            last_result: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// 0-based index of the paragraph the cursor points at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_paragraphs(&self) -> usize {
        self.lesson.paragraphs(&self.level).len()
    }

    /// The paragraph to read next; `None` once finished.
    pub fn current_paragraph(&self) -> Option<&str> {
        self.lesson
            .paragraphs(&self.level)
            .get(self.cursor)
            .map(String::as_str)
    }

    /// Result of the latest attempt, present only in
    /// [`SessionState::AwaitingRetryDecision`].
    pub fn last_result(&self) -> Option<&ComparisonResult> {
        self.last_result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Score one transcribed attempt against the current paragraph.
    ///
    /// Valid only while awaiting a paragraph. An empty hypothesis is a
    /// legal zero-match attempt, not an error.
    pub fn submit_attempt(
        &mut self,
        hypothesis: &str,
    ) -> Result<&ComparisonResult, SessionError> {
        if self.state != SessionState::AwaitingParagraph {
            return Err(SessionError::InvalidTransition {
                state: self.state,
                action: "submit an attempt",
            });
        }
        // The cursor is in range whenever the state says so.
        let reference = self
            .current_paragraph()
            .expect("AwaitingParagraph with cursor out of range");

        let result = compare(reference, hypothesis);
        self.state = SessionState::AwaitingRetryDecision;
        Ok(self.last_result.insert(result))
    }

    /// Discard the stored result and re-attempt the same paragraph.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::AwaitingRetryDecision {
            return Err(SessionError::InvalidTransition {
                state: self.state,
                action: "retry",
            });
        }
        self.last_result = None;
        self.state = SessionState::AwaitingParagraph;
        Ok(())
    }

    /// Move on to the next paragraph, or finish after the last one.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::AwaitingRetryDecision {
            return Err(SessionError::InvalidTransition {
                state: self.state,
                action: "advance",
            });
        }
        self.last_result = None;
        self.cursor += 1;
        self.state = if self.cursor >= self.total_paragraphs() {
            SessionState::Finished
        } else {
            SessionState::AwaitingParagraph
        };
        Ok(())
    }
}
