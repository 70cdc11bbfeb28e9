//! Black-box properties of the comparison engine

use readback_compare::{compare, normalize, ErrorKind};

#[test]
fn self_comparison_is_always_perfect() {
    let samples = [
        "A short sentence.",
        "Numbers like 42 and 7 count as words",
        "Punctuation; everywhere! (really)",
        "I'm sure they'll say it's fine",
    ];
    for s in samples {
        let result = compare(s, s);
        assert_eq!(result.accuracy, 100.0, "self-compare failed for {s:?}");
        assert!(result.errors.is_empty());
        assert_eq!(result.matched_words, result.total_words);
    }
}

#[test]
fn hypothesis_with_extra_words_does_not_inflate_accuracy() {
    let result = compare("good morning", "well good morning everyone");
    assert_eq!(result.total_words, 2);
    assert_eq!(result.matched_words, 2);
    assert_eq!(result.accuracy, 100.0);
    assert!(result.errors.is_empty());
}

#[test]
fn swapped_words_cost_exactly_one() {
    // LCS keeps the longer ordered subsequence; one of the swapped pair
    // is reported, never both.
    let result = compare("one two three", "one three two");
    assert_eq!(result.matched_words, 2);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn substitution_pairs_within_a_region() {
    let result = compare("the big red barn", "the very red barn");
    assert_eq!(result.errors.len(), 1);
    let err = &result.errors[0];
    assert_eq!(err.expected, "big");
    assert_eq!(err.found.as_deref(), Some("very"));
    assert_eq!(err.kind, ErrorKind::Substituted);
}

#[test]
fn run_of_two_misses_with_one_spoken_word() {
    // Region has two gapped reference words but only one gapped
    // hypothesis word: first pairs as substituted, second is missing.
    let result = compare("a b c d", "a x d");
    assert_eq!(result.matched_words, 2);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].kind, ErrorKind::Substituted);
    assert_eq!(result.errors[1].kind, ErrorKind::Missing);
}

#[test]
fn comparison_is_insensitive_to_surface_form() {
    let result = compare("Don't worry, be HAPPY!", "do not worry be happy");
    assert_eq!(result.accuracy, 100.0);
}

#[test]
fn serialized_contract_field_names() {
    let result = compare("alpha beta", "alpha gamma");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("accuracy").is_some());
    assert!(json.get("total_words").is_some());
    assert!(json.get("matched_words").is_some());
    let errors = json.get("errors").unwrap().as_array().unwrap();
    let err = &errors[0];
    assert_eq!(err.get("position").unwrap().as_u64(), Some(1));
    assert_eq!(err.get("expected").unwrap().as_str(), Some("beta"));
    assert_eq!(err.get("found").unwrap().as_str(), Some("gamma"));
    assert_eq!(err.get("kind").unwrap().as_str(), Some("substituted"));
}

#[test]
fn normalization_round_trip_is_stable() {
    let text = "It's a well-known FACT -- they'll agree.";
    let once = normalize(text);
    let twice = normalize(&once.to_joined());
    assert_eq!(once, twice);
}
