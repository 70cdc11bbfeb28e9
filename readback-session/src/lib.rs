//! Readback Practice Session
//!
//! A small synchronous state machine that walks a lesson level paragraph
//! by paragraph: hand out the current reference paragraph, accept one
//! transcribed attempt, score it with the comparison engine, then let the
//! caller decide between retrying and advancing.
//!
//! The session owns no I/O. Recording, transcription and rendering all
//! happen in the driving layer; the session only sequences them and keeps
//! the cursor honest. Wrong-order calls are caller bugs and surface as
//! [`SessionError::InvalidTransition`] rather than being ignored.
//!
//! ```
//! use readback_session::{PracticeSession, SessionState};
//! # use readback_lessons::Lesson;
//! # fn lesson() -> Lesson {
//! #     let mut paragraphs = std::collections::BTreeMap::new();
//! #     paragraphs.insert("3".to_string(), vec!["Hello world.".to_string()]);
//! #     let mut texts = std::collections::BTreeMap::new();
//! #     texts.insert("3".to_string(), "Hello world.".to_string());
//! #     Lesson { title: "t".into(), url: "u".into(), date: String::new(),
//! #         description: String::new(), levels: vec!["3".into()],
//! #         texts, level_urls: Default::default(), paragraphs }
//! # }
//!
//! let mut session = PracticeSession::start(lesson(), "3")?;
//! let result = session.submit_attempt("hello world")?;
//! assert_eq!(result.accuracy, 100.0);
//! session.advance()?;
//! assert_eq!(session.state(), SessionState::Finished);
//! # Ok::<(), readback_session::SessionError>(())
//! ```

mod error;
mod session;

pub use error::SessionError;
pub use session::{PracticeSession, SessionState};
