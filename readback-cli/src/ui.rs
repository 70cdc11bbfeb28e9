//! Terminal rendering helpers
//!
//! Colored output via crossterm: menus, the recording countdown bar
//! and the word-by-word comparison report.

use std::io::{stdout, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use readback_compare::{normalize, ComparisonResult, ErrorKind};

use crate::i18n::tr;

/// Two words this similar are probably a pronunciation slip, not a
/// different word. Tuned on pairs like jumps/jumped (0.96) versus
/// cat/dog (0.0).
const CLOSE_WORD_THRESHOLD: f64 = 0.84;

/// Average reading speed used for the paragraph time estimate.
const READING_WPM: u32 = 150;
const MIN_READING_SECONDS: u32 = 10;

pub fn clear_screen() -> Result<()> {
    execute!(
        stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

pub fn heading(text: &str) -> Result<()> {
    execute!(
        stdout(),
        SetForegroundColor(Color::Cyan),
        Print(format!("\n== {text} ==\n\n")),
        ResetColor
    )?;
    Ok(())
}

/// Numbered menu. Items render as `1) label`, `2) label`, ...
pub fn menu(items: &[&str]) -> Result<()> {
    let mut out = stdout();
    for (i, item) in items.iter().enumerate() {
        execute!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!("  {}) ", i + 1)),
            ResetColor,
            Print(format!("{item}\n"))
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Prompt and read one trimmed line from stdin.
pub fn prompt_line(prompt: &str) -> Result<String> {
    let mut out = stdout();
    execute!(out, Print(format!("{prompt}: ")))?;
    out.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn notice(text: &str) -> Result<()> {
    execute!(
        stdout(),
        SetForegroundColor(Color::Green),
        Print(format!("{text}\n")),
        ResetColor
    )?;
    Ok(())
}

pub fn warning(text: &str) -> Result<()> {
    execute!(
        stdout(),
        SetForegroundColor(Color::Red),
        Print(format!("{text}\n")),
        ResetColor
    )?;
    Ok(())
}

pub fn pause(lang: &str) -> Result<()> {
    prompt_line(tr("prompt-press-enter", lang))?;
    Ok(())
}

/// Seconds a reader needs for `word_count` words at 150 wpm, never
/// under ten seconds.
pub fn reading_estimate(word_count: usize) -> u32 {
    let words = word_count as u32;
    let seconds = (words * 60).div_ceil(READING_WPM);
    seconds.max(MIN_READING_SECONDS)
}

/// Draw a one-line countdown bar for `total` seconds.
///
/// Returns the seconds actually elapsed; Enter, q, Esc or Ctrl+C stop
/// the countdown early.
pub fn countdown(total: u32, label: &str) -> Result<u32> {
    let mut out = stdout();
    terminal::enable_raw_mode()?;
    let result = countdown_loop(&mut out, total, label);
    terminal::disable_raw_mode()?;
    execute!(out, Print("\n"))?;
    result
}

fn countdown_loop(out: &mut std::io::Stdout, total: u32, label: &str) -> Result<u32> {
    const BAR_WIDTH: u32 = 30;
    for elapsed in 0..total {
        let filled = (elapsed * BAR_WIDTH / total.max(1)) as usize;
        let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH as usize - filled);
        execute!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Red),
            Print(format!("● {label} [{bar}] {}s ", total - elapsed)),
            ResetColor
        )?;
        out.flush()?;

        if wait_second_or_cancel()? {
            return Ok(elapsed + 1);
        }
    }
    Ok(total)
}

/// Sleep one second while watching for a cancel key.
fn wait_second_or_cancel() -> Result<bool> {
    let deadline = std::time::Instant::now() + Duration::from_secs(1);
    loop {
        let now = std::time::Instant::now();
        if now >= deadline {
            return Ok(false);
        }
        if event::poll(deadline - now)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true)
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Word-by-word comparison report.
///
/// The reference paragraph is reprinted with matched words green and
/// failed words red, then each error is listed with what was heard.
pub fn render_report(reference: &str, result: &ComparisonResult, lang: &str) -> Result<()> {
    let mut out = stdout();
    let tokens = normalize(reference);

    execute!(out, Print("\n  "))?;
    for (pos, word) in tokens.tokens().iter().enumerate() {
        let failed = result.errors.iter().any(|e| e.position == pos);
        let color = if failed { Color::Red } else { Color::Green };
        execute!(
            out,
            SetForegroundColor(color),
            Print(word.as_str()),
            ResetColor,
            Print(" ")
        )?;
    }
    execute!(out, Print("\n\n"))?;

    let accuracy_color = if result.accuracy >= 80.0 {
        Color::Green
    } else if result.accuracy >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    execute!(
        out,
        Print(format!("  {}: ", tr("accuracy", lang))),
        SetForegroundColor(accuracy_color),
        Print(format!("{:.1}%", result.accuracy)),
        ResetColor,
        Print(format!(
            "  ({}/{} {})\n",
            result.matched_words,
            result.total_words,
            tr("words-matched", lang)
        ))
    )?;

    if result.errors.is_empty() {
        notice(&format!("  {}", tr("perfect", lang)))?;
        return Ok(());
    }

    execute!(out, Print(format!("\n  {}:\n", tr("mispronounced", lang))))?;
    for error in &result.errors {
        match (&error.kind, &error.found) {
            (ErrorKind::Substituted, Some(found)) => {
                let hint = if strsim::jaro_winkler(&error.expected, found) >= CLOSE_WORD_THRESHOLD
                {
                    format!(" ({})", tr("close", lang))
                } else {
                    String::new()
                };
                execute!(
                    out,
                    Print("    "),
                    SetForegroundColor(Color::Red),
                    Print(error.expected.as_str()),
                    ResetColor,
                    Print(format!(" → {found}{hint}\n"))
                )?;
            }
            _ => {
                execute!(
                    out,
                    Print("    "),
                    SetForegroundColor(Color::Red),
                    Print(error.expected.as_str()),
                    ResetColor,
                    Print(format!(" ({})\n", tr("missed", lang)))
                )?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_estimate_has_a_floor() {
        assert_eq!(reading_estimate(0), 10);
        assert_eq!(reading_estimate(10), 10);
    }

    #[test]
    fn reading_estimate_scales_with_length() {
        // 150 words at 150 wpm is one minute.
        assert_eq!(reading_estimate(150), 60);
        assert_eq!(reading_estimate(75), 30);
        // Partial seconds round up.
        assert_eq!(reading_estimate(151), 61);
    }

    #[test]
    fn close_threshold_separates_slips_from_substitutions() {
        assert!(strsim::jaro_winkler("jumps", "jumped") >= CLOSE_WORD_THRESHOLD);
        assert!(strsim::jaro_winkler("cat", "dog") < CLOSE_WORD_THRESHOLD);
    }
}
