//! Text normalization for pronunciation comparison
//!
//! Canonicalizes raw text (reference or transcript) into a token sequence
//! that can be compared word by word: lowercase, contractions expanded,
//! punctuation stripped, whitespace collapsed.

use serde::{Deserialize, Serialize};

/// An ordered sequence of lowercase word tokens.
///
/// Immutable once produced. Two values are only comparable when both were
/// built by [`normalize`], since the token form depends on the
/// normalization rules (contraction table, punctuation handling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText(Vec<String>);

impl NormalizedText {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }

    /// Join tokens back into a single space-separated string.
    pub fn to_joined(&self) -> String {
        self.0.join(" ")
    }
}

/// Normalize raw text into a comparable token sequence.
///
/// Rules, in order:
/// 1. Unicode lowercase.
/// 2. Expand known English contractions ("don't" -> "do not") before any
///    punctuation stripping, so the apostrophe's meaning is not lost.
/// 3. Drop every character that is not alphanumeric; punctuation inside a
///    word splits it ("well-known" -> "well known").
/// 4. Split on whitespace, dropping empty tokens.
///
/// Total function: any input (including empty) yields a possibly-empty
/// token sequence. Idempotent modulo representation.
pub fn normalize(text: &str) -> NormalizedText {
    let lowered = text.to_lowercase();
    let mut tokens: Vec<String> = Vec::new();

    for raw in lowered.split_whitespace() {
        // Contraction lookup sees the word with its apostrophe intact but
        // without surrounding punctuation ("don't," -> "don't").
        let candidate: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .collect();

        if let Some(expanded) = expand_contraction(&candidate) {
            tokens.extend(expanded.split(' ').map(str::to_string));
            continue;
        }

        for piece in raw.split(|c: char| !c.is_alphanumeric()) {
            if !piece.is_empty() {
                tokens.push(piece.to_string());
            }
        }
    }

    NormalizedText(tokens)
}

/// Fixed contraction table, keyed by the lowercased surface form.
///
/// Expansions are plain space-separated lowercase words. "cannot" is listed
/// so that it normalizes the same way as "can't".
fn expand_contraction(word: &str) -> Option<&'static str> {
    let expanded = match word {
        "i'm" => "i am",
        "i've" => "i have",
        "i'll" => "i will",
        "i'd" => "i would",
        "you're" => "you are",
        "you've" => "you have",
        "you'll" => "you will",
        "you'd" => "you would",
        "he's" => "he is",
        "he'll" => "he will",
        "he'd" => "he would",
        "she's" => "she is",
        "she'll" => "she will",
        "she'd" => "she would",
        "it's" => "it is",
        "it'll" => "it will",
        "we're" => "we are",
        "we've" => "we have",
        "we'll" => "we will",
        "we'd" => "we would",
        "they're" => "they are",
        "they've" => "they have",
        "they'll" => "they will",
        "they'd" => "they would",
        "that's" => "that is",
        "that'll" => "that will",
        "who's" => "who is",
        "who'll" => "who will",
        "what's" => "what is",
        "what'll" => "what will",
        "where's" => "where is",
        "where'll" => "where will",
        "when's" => "when is",
        "when'll" => "when will",
        "why's" => "why is",
        "why'll" => "why will",
        "how's" => "how is",
        "how'll" => "how will",
        "isn't" => "is not",
        "aren't" => "are not",
        "wasn't" => "was not",
        "weren't" => "were not",
        "hasn't" => "has not",
        "haven't" => "have not",
        "hadn't" => "had not",
        "doesn't" => "does not",
        "don't" => "do not",
        "didn't" => "did not",
        "won't" => "will not",
        "wouldn't" => "would not",
        "shan't" => "shall not",
        "shouldn't" => "should not",
        "can't" => "can not",
        "cannot" => "can not",
        "couldn't" => "could not",
        "mustn't" => "must not",
        "mightn't" => "might not",
        "needn't" => "need not",
        "let's" => "let us",
        "here's" => "here is",
        "there's" => "there is",
        "there'll" => "there will",
        _ => return None,
    };
    Some(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        normalize(text).into_tokens()
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(toks("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn expands_contractions() {
        assert_eq!(toks("I'm ready"), vec!["i", "am", "ready"]);
        assert_eq!(toks("don't stop"), vec!["do", "not", "stop"]);
        assert_eq!(toks("cannot"), vec!["can", "not"]);
    }

    #[test]
    fn contraction_survives_adjacent_punctuation() {
        assert_eq!(toks("\"Don't!\""), vec!["do", "not"]);
        assert_eq!(toks("it's, fine"), vec!["it", "is", "fine"]);
    }

    #[test]
    fn inner_punctuation_splits_words() {
        assert_eq!(toks("well-known fact"), vec!["well", "known", "fact"]);
        assert_eq!(toks("o'clock"), vec!["o", "clock"]);
    }

    #[test]
    fn empty_and_punctuation_only_inputs() {
        assert!(toks("").is_empty());
        assert!(toks("   \t\n").is_empty());
        assert!(toks("?!...;  --").is_empty());
    }

    #[test]
    fn keeps_accented_letters() {
        assert_eq!(toks("Café für señor"), vec!["café", "für", "señor"]);
    }

    #[test]
    fn idempotent_modulo_representation() {
        let inputs = [
            "The quick brown fox",
            "I'm sure it's fine, isn't it?",
            "Let's go -- now!",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once.to_joined());
            assert_eq!(once, twice, "re-normalizing changed {input:?}");
        }
    }
}
