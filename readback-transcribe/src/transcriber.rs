//! External engine invocation

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{Result, TranscribeError};
use crate::language::Language;

/// Default engine binary, overridable from configuration.
pub const DEFAULT_COMMAND: &str = "whisper-cli";

/// Wraps one whisper-style command line per transcription.
#[derive(Debug, Clone)]
pub struct Transcriber {
    command: String,
    model_path: PathBuf,
}

impl Transcriber {
    pub fn new<C: Into<String>, M: Into<PathBuf>>(command: C, model_path: M) -> Self {
        Self {
            command: command.into(),
            model_path: model_path.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Whether the engine binary responds at all.
    pub fn check_available(&self) -> bool {
        match Command::new(&self.command).arg("--help").output() {
            Ok(_) => true,
            Err(err) => {
                debug!("Engine {:?} unavailable: {err}", self.command);
                false
            }
        }
    }

    /// Transcribe a WAV file, deleting it afterwards.
    ///
    /// Returns the trimmed transcript; an empty string is a valid
    /// result (silence or unintelligible audio), not an error.
    pub fn transcribe<P: AsRef<Path>>(&self, wav: P, language: Language) -> Result<String> {
        let wav = wav.as_ref();
        if !wav.exists() {
            return Err(TranscribeError::AudioMissing(wav.to_path_buf()));
        }

        debug!("Transcribing {} as {}", wav.display(), language);
        let output = Command::new(&self.command)
            .arg("-m")
            .arg(&self.model_path)
            .args(["-l", language.code(), "-nt"])
            .arg("-f")
            .arg(wav)
            .output();

        // The recording has served its purpose either way.
        if let Err(err) = std::fs::remove_file(wav) {
            warn!("Could not remove {}: {err}", wav.display());
        }

        let output = output.map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => TranscribeError::EngineNotFound {
                command: self.command.clone(),
            },
            _ => TranscribeError::Io(err),
        })?;

        if !output.status.success() {
            return Err(TranscribeError::EngineFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(clean_transcript(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND, "models/ggml-base.bin")
    }
}

/// Collapse engine output into a single trimmed line of text.
fn clean_transcript(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cleans_multiline_output() {
        assert_eq!(
            clean_transcript("  The cat\n sat on the mat.\n"),
            "The cat sat on the mat."
        );
        assert_eq!(clean_transcript("\n  \n"), "");
    }

    #[test]
    fn missing_audio_is_reported() {
        let t = Transcriber::new("whisper-cli", "model.bin");
        let err = t
            .transcribe("/nonexistent/take.wav", Language::En)
            .unwrap_err();
        assert!(matches!(err, TranscribeError::AudioMissing(_)));
    }

    #[test]
    fn missing_engine_is_reported_and_wav_removed() {
        let mut wav = tempfile::NamedTempFile::new().unwrap();
        wav.write_all(b"RIFF").unwrap();
        let path = wav.into_temp_path().keep().unwrap();

        let t = Transcriber::new("definitely-not-a-real-engine-xyz", "model.bin");
        let err = t.transcribe(&path, Language::Es).unwrap_err();
        assert!(matches!(err, TranscribeError::EngineNotFound { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn unavailable_engine_probe() {
        let t = Transcriber::new("definitely-not-a-real-engine-xyz", "model.bin");
        assert!(!t.check_available());
    }
}
