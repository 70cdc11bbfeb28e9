//! Error types for practice sessions

use thiserror::Error;

use crate::session::SessionState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The requested level has no paragraphs in this lesson.
    #[error("Lesson has no paragraphs for level {level:?}")]
    InvalidLevel { level: String },

    /// A transition was requested that the current state does not allow.
    /// This is a bug in the driving code, not a user-facing condition;
    /// treat it as fatal instead of swallowing it.
    #[error("Cannot {action} while session is in state {state:?}")]
    InvalidTransition {
        state: SessionState,
        action: &'static str,
    },
}
