//! One recording-plus-transcription take

use anyhow::{Context, Result};
use tracing::debug;

use readback_capture::Recorder;
use readback_transcribe::Transcriber;

use crate::config::AppConfig;
use crate::i18n::tr;
use crate::ui;

/// Record for up to `duration` seconds and transcribe the take.
///
/// Returns `None` when nothing usable was heard or no microphone is
/// available; real failures (engine missing, spawn errors) bubble up.
pub fn capture_transcript(config: &AppConfig, duration: u32) -> Result<Option<String>> {
    let lang = &config.ui_language;

    let recorder = match &config.device {
        Some(device) => Recorder::new(device.clone()),
        None => Recorder::with_default_device(),
    };
    if !recorder.check_microphone() {
        ui::warning(tr("no-microphone", lang))?;
        return Ok(None);
    }
    debug!("Recording {duration}s on {}", recorder.device());

    let handle = recorder.start().context("Failed to start recording")?;
    ui::countdown(duration, tr("recording", lang))?;
    let wav = handle.stop().context("Failed to stop recording")?;

    ui::notice(tr("transcribing", lang))?;
    let transcriber = Transcriber::new(&config.transcriber_command, &config.model_path);
    let text = transcriber
        .transcribe(&wav, config.language)
        .context("Transcription failed")?;

    if text.is_empty() {
        ui::warning(tr("nothing-heard", lang))?;
        Ok(None)
    } else {
        Ok(Some(text))
    }
}
