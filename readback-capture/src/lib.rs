//! Readback Audio Capture
//!
//! Records microphone audio by driving the external `arecord` utility
//! (ALSA). The rest of the application only ever sees WAV file paths;
//! audio handling stays entirely in the OS tool, per the application's
//! "capture is an external collaborator" boundary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use readback_capture::Recorder;
//!
//! let recorder = Recorder::with_default_device();
//! let handle = recorder.start()?;
//! std::thread::sleep(std::time::Duration::from_secs(5));
//! let wav_path = handle.stop()?;
//! # Ok::<(), readback_capture::CaptureError>(())
//! ```

mod error;
mod recorder;

pub use error::{CaptureError, Result};
pub use recorder::{detect_devices, find_working_microphone, Recorder, RecordingHandle};

/// Capture sample rate expected by the transcription engine.
pub const SAMPLE_RATE: u32 = 16_000;

/// Mono capture.
pub const CHANNELS: u32 = 1;
