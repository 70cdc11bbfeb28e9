//! Settings menu and the config edits shared with dictation mode

use anyhow::Result;

use readback_history::HistoryLog;
use readback_transcribe::Language;

use crate::config::AppConfig;
use crate::i18n::tr;
use crate::ui;

pub fn run(config: &mut AppConfig, history: &mut HistoryLog) -> Result<()> {
    loop {
        let lang = config.ui_language.clone();
        ui::clear_screen()?;
        ui::heading(tr("settings-title", &lang))?;
        ui::menu(&[
            tr("change-duration", &lang),
            tr("change-language", &lang),
            tr("clear-history", &lang),
            tr("back", &lang),
        ])?;

        match ui::prompt_line(tr("prompt-choice", &lang))?.as_str() {
            "1" => change_duration(config)?,
            "2" => change_language(config)?,
            "3" => clear_history(history, &lang)?,
            "4" | "" | "b" | "q" => return Ok(()),
            _ => ui::warning(tr("invalid-choice", &lang))?,
        }
    }
}

/// Ask for a new recording duration and persist it.
pub fn change_duration(config: &mut AppConfig) -> Result<()> {
    let lang = config.ui_language.clone();
    let answer = ui::prompt_line(tr("duration-prompt", &lang))?;
    match answer.parse::<u32>() {
        Ok(seconds) => {
            config.set_duration(seconds);
            config.save()?;
            ui::notice(&format!(
                "{} {}s",
                tr("duration-set", &lang),
                config.duration
            ))?;
        }
        Err(_) => ui::warning(tr("invalid-choice", &lang))?,
    }
    Ok(())
}

/// Ask for a new spoken language and persist it.
pub fn change_language(config: &mut AppConfig) -> Result<()> {
    let lang = config.ui_language.clone();
    let names: Vec<String> = Language::all()
        .iter()
        .map(|l| format!("{} ({})", l.name(), l.code()))
        .collect();
    let items: Vec<&str> = names.iter().map(String::as_str).collect();

    println!("\n{}:", tr("language-prompt", &lang));
    ui::menu(&items)?;

    let answer = ui::prompt_line(tr("prompt-choice", &lang))?;
    let chosen = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| Language::all().get(n.wrapping_sub(1)).copied())
        .or_else(|| Language::from_code(&answer));

    match chosen {
        Some(language) => {
            config.language = language;
            config.save()?;
            ui::notice(&format!(
                "{} {}",
                tr("language-set", &lang),
                language.name()
            ))?;
        }
        None => ui::warning(tr("invalid-choice", &lang))?,
    }
    Ok(())
}

fn clear_history(history: &mut HistoryLog, lang: &str) -> Result<()> {
    let stats = history.stats()?;
    println!("\n{} {}", stats.total, tr("history-entries", lang));
    if stats.total == 0 {
        return Ok(());
    }
    let answer = ui::prompt_line(tr("confirm-clear", lang))?;
    if answer.eq_ignore_ascii_case("y") {
        history.clear_all()?;
        ui::notice(tr("history-cleared", lang))?;
    }
    Ok(())
}
