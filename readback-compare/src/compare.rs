//! Pronunciation comparison over aligned token sequences

use serde::{Deserialize, Serialize};

use crate::align::{align, AlignOp};
use crate::normalize::normalize;

/// Why a reference word was counted as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A different word was spoken where this one was expected.
    Substituted,
    /// The word was dropped entirely.
    Missing,
}

/// One reference word that was not matched by the hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordError {
    /// 0-based index into the normalized reference token sequence.
    pub position: usize,
    /// The expected reference token.
    pub expected: String,
    /// The hypothesis token spoken in its place, if any.
    pub found: Option<String>,
    pub kind: ErrorKind,
}

/// Result of comparing one attempt against a reference paragraph.
///
/// Field names, types and the one-decimal accuracy rounding are the exact
/// rendering contract consumed by the UI; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Percentage of reference words matched, in `[0.0, 100.0]`, rounded
    /// to one decimal place. `100.0` when the reference is empty.
    pub accuracy: f64,
    /// Count of reference tokens.
    pub total_words: usize,
    /// Count of reference tokens found, in order, in the hypothesis.
    pub matched_words: usize,
    /// One entry per unmatched reference token, ordered by position.
    pub errors: Vec<WordError>,
}

impl ComparisonResult {
    /// A comparison against an empty reference: nothing to read means
    /// nothing to get wrong.
    fn empty_reference() -> Self {
        Self {
            accuracy: 100.0,
            total_words: 0,
            matched_words: 0,
            errors: Vec::new(),
        }
    }
}

/// Compare a reference paragraph against a transcribed attempt.
///
/// Both inputs are normalized, aligned with [`align`], and every
/// unmatched reference token is classified: if the same changed region
/// also has an unmatched hypothesis token at the corresponding offset the
/// word counts as substituted, otherwise as missing.
///
/// Never fails; degenerate inputs (empty reference, empty hypothesis) are
/// well-defined edge cases, not errors.
pub fn compare(reference: &str, hypothesis: &str) -> ComparisonResult {
    let ref_tokens = normalize(reference).into_tokens();
    let hyp_tokens = normalize(hypothesis).into_tokens();

    let total_words = ref_tokens.len();
    if total_words == 0 {
        return ComparisonResult::empty_reference();
    }

    let ops = align(&ref_tokens, &hyp_tokens);

    let mut errors: Vec<WordError> = Vec::new();
    let mut matched_words = 0usize;

    // Unmatched tokens accumulated since the last match anchor. Pairing
    // the k-th gapped reference word with the k-th gapped hypothesis word
    // of the same region is what turns "jumps"/"jumped" into a single
    // substitution rather than a miss plus an extra.
    let mut pending_refs: Vec<usize> = Vec::new();
    let mut pending_hyps: Vec<usize> = Vec::new();

    let flush =
        |pending_refs: &mut Vec<usize>, pending_hyps: &mut Vec<usize>, errors: &mut Vec<WordError>| {
            for (k, &ref_idx) in pending_refs.iter().enumerate() {
                if let Some(&hyp_idx) = pending_hyps.get(k) {
                    errors.push(WordError {
                        position: ref_idx,
                        expected: ref_tokens[ref_idx].clone(),
                        found: Some(hyp_tokens[hyp_idx].clone()),
                        kind: ErrorKind::Substituted,
                    });
                } else {
                    errors.push(WordError {
                        position: ref_idx,
                        expected: ref_tokens[ref_idx].clone(),
                        found: None,
                        kind: ErrorKind::Missing,
                    });
                }
            }
            pending_refs.clear();
            pending_hyps.clear();
        };

    for op in ops {
        match op {
            AlignOp::Match { .. } => {
                flush(&mut pending_refs, &mut pending_hyps, &mut errors);
                matched_words += 1;
            }
            AlignOp::RefGap { ref_idx } => pending_refs.push(ref_idx),
            AlignOp::HypGap { hyp_idx } => pending_hyps.push(hyp_idx),
        }
    }
    flush(&mut pending_refs, &mut pending_hyps, &mut errors);

    let accuracy = round_one_decimal(100.0 * matched_words as f64 / total_words as f64);

    ComparisonResult {
        accuracy,
        total_words,
        matched_words,
        errors,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_match() {
        let result = compare("Hello world", "hello, world!");
        assert_eq!(result.total_words, 2);
        assert_eq!(result.matched_words, 2);
        assert!(result.errors.is_empty());
        assert_relative_eq!(result.accuracy, 100.0);
    }

    #[test]
    fn substitution_scenario() {
        let result = compare("The quick brown fox jumps", "the quick brown fox jumped");
        assert_eq!(result.total_words, 5);
        assert_eq!(result.matched_words, 4);
        assert_eq!(result.errors.len(), 1);
        let err = &result.errors[0];
        assert_eq!(err.position, 4);
        assert_eq!(err.expected, "jumps");
        assert_eq!(err.found.as_deref(), Some("jumped"));
        assert_eq!(err.kind, ErrorKind::Substituted);
        assert_relative_eq!(result.accuracy, 80.0);
    }

    #[test]
    fn empty_hypothesis_all_missing() {
        let result = compare("Hello world", "");
        assert_eq!(result.total_words, 2);
        assert_eq!(result.matched_words, 0);
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.kind == ErrorKind::Missing && e.found.is_none()));
        assert_relative_eq!(result.accuracy, 0.0);
    }

    #[test]
    fn empty_reference_convention() {
        let result = compare("", "anything at all");
        assert_eq!(result.total_words, 0);
        assert_eq!(result.matched_words, 0);
        assert!(result.errors.is_empty());
        assert_relative_eq!(result.accuracy, 100.0);
    }

    #[test]
    fn contraction_equivalence() {
        let result = compare("I'm ready", "i am ready");
        assert!(result.errors.is_empty());
        assert_relative_eq!(result.accuracy, 100.0);
    }

    #[test]
    fn dropped_word_is_missing_not_substituted() {
        let result = compare("one two three", "one three");
        assert_eq!(result.matched_words, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].expected, "two");
        assert_eq!(result.errors[0].kind, ErrorKind::Missing);
    }

    #[test]
    fn accounting_invariant_holds() {
        let cases = [
            ("a b c d", "a x c"),
            ("the cat sat", "a dog ran away"),
            ("", ""),
            ("single", ""),
            ("one two", "one two three four"),
        ];
        for (reference, hypothesis) in cases {
            let result = compare(reference, hypothesis);
            assert_eq!(
                result.matched_words + result.errors.len(),
                result.total_words,
                "accounting broke for {reference:?} vs {hypothesis:?}"
            );
            assert!(result.accuracy >= 0.0 && result.accuracy <= 100.0);
        }
    }

    #[test]
    fn errors_ordered_by_position() {
        let result = compare("alpha beta gamma delta", "alpha x y delta");
        let positions: Vec<usize> = result.errors.iter().map(|e| e.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn accuracy_rounds_to_one_decimal() {
        // 2 of 3 matched: 66.666... -> 66.7
        let result = compare("one two three", "one two four");
        assert_relative_eq!(result.accuracy, 66.7);
    }

    #[test]
    fn deterministic_results() {
        let a = "she sells sea shells by the sea shore";
        let b = "she sells shells by the shore";
        assert_eq!(compare(a, b), compare(a, b));
    }
}
