//! Interface translations
//!
//! A flat `(key, english, spanish)` table. Unknown UI languages fall
//! back to English; unknown keys render as the key itself so a missing
//! translation is visible instead of a crash.

static STRINGS: &[(&str, &str, &str)] = &[
    ("app-title", "Readback", "Readback"),
    ("menu-title", "Main menu", "Menú principal"),
    ("menu-dictate", "Dictate", "Dictar"),
    ("menu-practice", "Practice pronunciation", "Practicar pronunciación"),
    ("menu-settings", "Settings", "Configuración"),
    ("menu-quit", "Quit", "Salir"),
    ("prompt-choice", "Choice", "Opción"),
    ("prompt-press-enter", "Press Enter to continue", "Pulsa Enter para continuar"),
    ("invalid-choice", "Invalid choice", "Opción no válida"),
    ("recording", "Recording", "Grabando"),
    ("recording-seconds", "seconds", "segundos"),
    ("transcribing", "Transcribing...", "Transcribiendo..."),
    ("transcript", "Transcript", "Transcripción"),
    ("nothing-heard", "Nothing was heard", "No se escuchó nada"),
    ("no-microphone", "No working microphone found", "No se encontró un micrófono"),
    ("dictate-again", "Dictate again", "Dictar de nuevo"),
    ("change-duration", "Change duration", "Cambiar duración"),
    ("change-language", "Change language", "Cambiar idioma"),
    ("back", "Back", "Volver"),
    ("duration-prompt", "Recording duration in seconds (1-300)", "Duración de grabación en segundos (1-300)"),
    ("duration-set", "Duration set to", "Duración fijada en"),
    ("language-prompt", "Spoken language", "Idioma hablado"),
    ("language-set", "Language set to", "Idioma fijado en"),
    ("fetching-lessons", "Fetching lessons...", "Descargando lecciones..."),
    ("lessons-title", "Lessons", "Lecciones"),
    ("lessons-empty", "No lessons available", "No hay lecciones disponibles"),
    ("lessons-refresh", "Refresh lessons", "Actualizar lecciones"),
    ("lessons-next-page", "Next page", "Página siguiente"),
    ("lessons-prev-page", "Previous page", "Página anterior"),
    ("level-prompt", "Choose a level", "Elige un nivel"),
    ("level", "Level", "Nivel"),
    ("paragraph", "Paragraph", "Párrafo"),
    ("read-aloud", "Read this paragraph aloud", "Lee este párrafo en voz alta"),
    ("estimated-time", "Estimated reading time", "Tiempo estimado de lectura"),
    ("accuracy", "Accuracy", "Precisión"),
    ("words-matched", "words matched", "palabras correctas"),
    ("mispronounced", "Words to review", "Palabras a repasar"),
    ("missed", "missed", "omitida"),
    ("close", "close", "casi"),
    ("perfect", "Perfect reading!", "¡Lectura perfecta!"),
    ("retry", "Retry this paragraph", "Repetir este párrafo"),
    ("next-paragraph", "Next paragraph", "Siguiente párrafo"),
    ("lesson-finished", "Lesson finished!", "¡Lección terminada!"),
    ("settings-title", "Settings", "Configuración"),
    ("clear-history", "Clear history", "Borrar historial"),
    ("history-entries", "history entries", "entradas en el historial"),
    ("confirm-clear", "Clear them all? [y/N]", "¿Borrar todas? [y/N]"),
    ("history-cleared", "History cleared", "Historial borrado"),
    ("goodbye", "Goodbye!", "¡Hasta luego!"),
];

/// Look up a UI string for the given language code.
pub fn tr<'a>(key: &'a str, lang: &str) -> &'a str {
    for (k, en, es) in STRINGS {
        if *k == key {
            return if lang == "es" { es } else { en };
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_languages() {
        assert_eq!(tr("menu-quit", "en"), "Quit");
        assert_eq!(tr("menu-quit", "es"), "Salir");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(tr("menu-quit", "fr"), "Quit");
    }

    #[test]
    fn unknown_key_renders_as_itself() {
        assert_eq!(tr("no-such-key", "en"), "no-such-key");
    }

    #[test]
    fn every_entry_has_both_translations() {
        for (key, en, es) in STRINGS {
            assert!(!en.is_empty(), "missing English for {key}");
            assert!(!es.is_empty(), "missing Spanish for {key}");
        }
    }
}
