//! Free dictation mode

use anyhow::Result;

use readback_history::{HistoryEntry, HistoryLog};

use crate::config::AppConfig;
use crate::i18n::tr;
use crate::recording;
use crate::settings;
use crate::ui;

pub fn run(config: &mut AppConfig, history: &mut HistoryLog) -> Result<()> {
    loop {
        let lang = config.ui_language.clone();
        ui::clear_screen()?;
        ui::heading(tr("menu-dictate", &lang))?;

        take(config, history)?;

        ui::menu(&[
            tr("dictate-again", &lang),
            tr("change-duration", &lang),
            tr("change-language", &lang),
            tr("back", &lang),
        ])?;
        match ui::prompt_line(tr("prompt-choice", &lang))?.as_str() {
            "1" | "" => {}
            "2" => settings::change_duration(config)?,
            "3" => settings::change_language(config)?,
            "4" | "b" | "q" => return Ok(()),
            _ => ui::warning(tr("invalid-choice", &lang))?,
        }
    }
}

/// A single take: record, transcribe, show and log the transcript.
pub fn take(config: &AppConfig, history: &mut HistoryLog) -> Result<()> {
    let lang = &config.ui_language;
    if let Some(text) = recording::capture_transcript(config, config.duration)? {
        println!("\n{}:\n  {text}\n", tr("transcript", lang));
        history.add(HistoryEntry::new(
            config.language.code(),
            config.duration,
            text,
        ));
        history.save()?;
    }
    Ok(())
}
