//! Error types for transcription

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("Transcription engine {command:?} not found on PATH")]
    EngineNotFound { command: String },

    #[error("Transcription engine exited with an error: {stderr}")]
    EngineFailed { stderr: String },

    #[error("Audio file not found: {0}")]
    AudioMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
