//! Speech-to-text by shelling out to a whisper-style CLI engine.
//!
//! # Features
//!
//! - **Language selection**: English, Spanish, French and German
//! - **Engine probing**: check the transcription binary is installed
//!   before recording anything
//! - **Cleanup**: recorded WAV files are removed after transcription
//!
//! # Quick Start
//!
//! ```no_run
//! use readback_transcribe::{Language, Transcriber};
//!
//! let transcriber = Transcriber::new("whisper-cli", "models/base.bin");
//! let text = transcriber.transcribe("take.wav", Language::En)?;
//! println!("heard: {text}");
//! # Ok::<(), readback_transcribe::TranscribeError>(())
//! ```

mod error;
mod language;
mod transcriber;

pub use error::{Result, TranscribeError};
pub use language::Language;
pub use transcriber::Transcriber;
