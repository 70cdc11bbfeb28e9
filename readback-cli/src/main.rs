//! Readback - dictate and practice pronunciation from the terminal
//!
//! Records short takes with `arecord`, transcribes them through an
//! external whisper-style engine, and grades read-aloud practice
//! against Breaking News English lessons word by word.

mod config;
mod dictation;
mod i18n;
mod practice;
mod recording;
mod settings;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use readback_history::HistoryLog;
use readback_lessons::LessonClient;
use readback_transcribe::Language;

use crate::config::AppConfig;
use crate::i18n::tr;

#[derive(Parser, Debug)]
#[command(name = "readback", version, about = "Terminal dictation and pronunciation practice")]
struct Args {
    /// Recording duration in seconds (1-300)
    #[arg(short, long)]
    duration: Option<u32>,

    /// Spoken language code (en, es, fr, de)
    #[arg(short, long)]
    language: Option<String>,

    /// Record one dictation take and exit
    #[arg(short, long)]
    quick: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut config = AppConfig::load().context("Could not load configuration")?;
    if let Some(duration) = args.duration {
        config.set_duration(duration);
    }
    if let Some(code) = &args.language {
        match Language::from_code(code) {
            Some(language) => config.language = language,
            None => warn!("Unknown language {code:?}, keeping {}", config.language),
        }
    }

    let mut history = HistoryLog::new().context("Could not open history")?;

    if args.quick {
        dictation::take(&config, &mut history)?;
        return Ok(());
    }

    // Warm the lesson cache while the user is still in the menu.
    std::thread::spawn(|| {
        if let Ok(client) = LessonClient::new() {
            if let Err(err) = client.fetch_lessons(true) {
                info!("Lesson warm-up fetch failed: {err}");
            }
        }
    });

    run_menu(&mut config, &mut history)?;

    history.save().context("Could not save history")?;
    println!("{}", tr("goodbye", &config.ui_language));
    Ok(())
}

fn run_menu(config: &mut AppConfig, history: &mut HistoryLog) -> Result<()> {
    loop {
        let lang = config.ui_language.clone();
        ui::clear_screen()?;
        ui::heading(tr("app-title", &lang))?;
        ui::menu(&[
            tr("menu-dictate", &lang),
            tr("menu-practice", &lang),
            tr("menu-settings", &lang),
            tr("menu-quit", &lang),
        ])?;

        match ui::prompt_line(tr("prompt-choice", &lang))?.as_str() {
            "1" => dictation::run(config, history)?,
            "2" => practice::run(config, history)?,
            "3" => settings::run(config, history)?,
            "4" | "q" => return Ok(()),
            _ => ui::warning(tr("invalid-choice", &lang))?,
        }
    }
}
