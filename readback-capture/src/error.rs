//! Error types for audio capture

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptureError>;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("arecord not found; install ALSA utilities (e.g. `apt install alsa-utils`)")]
    ArecordNotFound,

    #[error("Permission denied accessing microphone: {0}")]
    PermissionDenied(String),

    #[error("Recording device {0:?} not found")]
    DeviceNotFound(String),

    #[error("Failed to start recording: {0}")]
    Spawn(String),

    #[error("Not recording")]
    NotRecording,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
