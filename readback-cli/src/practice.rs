//! Pronunciation practice mode
//!
//! Drives a `PracticeSession` paragraph by paragraph: show the text,
//! record the user reading it, compare, render the report, then let
//! the user retry or move on.

use anyhow::{Context, Result};
use tracing::warn;

use readback_history::{HistoryEntry, HistoryLog};
use readback_lessons::{Lesson, LessonClient};
use readback_session::PracticeSession;

use crate::config::AppConfig;
use crate::i18n::tr;
use crate::recording;
use crate::ui;

const LESSONS_PER_PAGE: usize = 5;

pub fn run(config: &mut AppConfig, history: &mut HistoryLog) -> Result<()> {
    let lang = config.ui_language.clone();
    let client = LessonClient::new().context("Could not set up lesson client")?;

    ui::notice(tr("fetching-lessons", &lang))?;
    let mut lessons = load_lessons(&client);

    loop {
        let Some(lesson) = pick_lesson(&client, &mut lessons, &lang)? else {
            return Ok(());
        };
        let Some(level) = pick_level(&lesson, &lang)? else {
            continue;
        };

        let session = PracticeSession::start(lesson, &level)?;
        run_session(session, config, history)?;
    }
}

/// Fresh fetch with stale-cache fallback handled by the client; a total
/// failure just leaves the list empty.
fn load_lessons(client: &LessonClient) -> Vec<Lesson> {
    match client.fetch_lessons(true) {
        Ok(lessons) => lessons,
        Err(err) => {
            warn!("Lesson fetch failed: {err}");
            client.cached_lessons()
        }
    }
}

fn pick_lesson(
    client: &LessonClient,
    lessons: &mut Vec<Lesson>,
    lang: &str,
) -> Result<Option<Lesson>> {
    let mut page = 0usize;
    loop {
        ui::clear_screen()?;
        ui::heading(tr("lessons-title", lang))?;

        if lessons.is_empty() {
            ui::warning(tr("lessons-empty", lang))?;
        }

        let start = page * LESSONS_PER_PAGE;
        let visible = &lessons[start.min(lessons.len())..(start + LESSONS_PER_PAGE).min(lessons.len())];
        let lines: Vec<String> = visible
            .iter()
            .map(|l| format!("{}  ({})", l.title, l.date))
            .collect();
        let items: Vec<&str> = lines.iter().map(String::as_str).collect();
        ui::menu(&items)?;

        let more = start + LESSONS_PER_PAGE < lessons.len();
        println!(
            "  n) {}   p) {}   r) {}   b) {}",
            tr("lessons-next-page", lang),
            tr("lessons-prev-page", lang),
            tr("lessons-refresh", lang),
            tr("back", lang)
        );

        match ui::prompt_line(tr("prompt-choice", lang))?.as_str() {
            "n" if more => page += 1,
            "p" if page > 0 => page -= 1,
            "r" => {
                ui::notice(tr("fetching-lessons", lang))?;
                client.clear_cache().ok();
                *lessons = load_lessons(client);
                page = 0;
            }
            "b" | "q" => return Ok(None),
            answer => match answer.parse::<usize>() {
                Ok(n) if n >= 1 && n <= visible.len() => {
                    return Ok(Some(visible[n - 1].clone()));
                }
                _ => ui::warning(tr("invalid-choice", lang))?,
            },
        }
    }
}

fn pick_level(lesson: &Lesson, lang: &str) -> Result<Option<String>> {
    let levels: Vec<String> = lesson
        .levels
        .iter()
        .map(|l| format!("{} {}", tr("level", lang), l))
        .collect();
    if levels.is_empty() {
        ui::warning(tr("lessons-empty", lang))?;
        return Ok(None);
    }
    let items: Vec<&str> = levels.iter().map(String::as_str).collect();

    println!("\n{}:", tr("level-prompt", lang));
    ui::menu(&items)?;

    let answer = ui::prompt_line(tr("prompt-choice", lang))?;
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 && n <= lesson.levels.len() => Ok(Some(lesson.levels[n - 1].clone())),
        _ => Ok(None),
    }
}

fn run_session(
    mut session: PracticeSession,
    config: &AppConfig,
    history: &mut HistoryLog,
) -> Result<()> {
    let lang = &config.ui_language;

    while !session.is_finished() {
        let paragraph = match session.current_paragraph() {
            Some(p) => p.to_string(),
            None => break,
        };
        let estimate = ui::reading_estimate(paragraph.split_whitespace().count());

        ui::clear_screen()?;
        ui::heading(&format!(
            "{} {}/{}",
            tr("paragraph", lang),
            session.cursor() + 1,
            session.total_paragraphs()
        ))?;
        println!("{}\n", tr("read-aloud", lang));
        println!("  {paragraph}\n");
        println!("{}: ~{estimate}s\n", tr("estimated-time", lang));
        ui::pause(lang)?;

        let Some(heard) = recording::capture_transcript(config, estimate)? else {
            ui::pause(lang)?;
            continue;
        };

        let result = session.submit_attempt(&heard)?.clone();
        ui::render_report(&paragraph, &result, lang)?;

        history.add(HistoryEntry::new(
            config.language.code(),
            estimate,
            format!(
                "[Practice: {} P{}] {heard}",
                session.lesson().title,
                session.cursor() + 1
            ),
        ));
        history.save()?;

        println!();
        ui::menu(&[tr("retry", lang), tr("next-paragraph", lang)])?;
        match ui::prompt_line(tr("prompt-choice", lang))?.as_str() {
            "1" => session.retry()?,
            _ => session.advance()?,
        }
    }

    ui::notice(&format!("\n{}", tr("lesson-finished", lang)))?;
    ui::pause(lang)?;
    Ok(())
}
