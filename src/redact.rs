use crate::consts::REDACTED_MARKER;
use crate::dictionary::Dictionary;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+[\w'-]*[.,!?]?\b").expect("token pattern is valid"));

/// Replaces every purely alphabetic token that is not in `dictionary` with
/// the redaction marker. Trailing `.,!?` is kept after the marker.
pub fn validate_text(text: &str, dictionary: &Dictionary) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let word = token.trim_matches(|c| matches!(c, '.' | ',' | '!' | '?'));
            let alphabetic = !word.is_empty() && word.chars().all(char::is_alphabetic);
            if alphabetic && !dictionary.contains(word) {
                let suffix = &token[word.len()..];
                format!("{}{}", REDACTED_MARKER, suffix)
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// Share of alphabetic tokens found in the dictionary, 0.0 for none.
pub fn dictionary_coverage(text: &str, dictionary: &Dictionary) -> f32 {
    let mut total = 0usize;
    let mut known = 0usize;
    for w in crate::classic::tokens::words(text) {
        total += 1;
        if dictionary.contains(w) {
            known += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        known as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_words(["the", "cat", "sat", "on", "mat"])
    }

    #[test]
    fn unknown_words_are_redacted() {
        let out = validate_text("The cat sat on the xyzzy.", &dict());
        assert_eq!(out, "The cat sat on the [REDACTED].");
    }

    #[test]
    fn numbers_and_mixed_tokens_pass_through() {
        let out = validate_text("cat 42 mat", &dict());
        assert_eq!(out, "cat 42 mat");
    }

    #[test]
    fn coverage_counts_known_words() {
        let c = dictionary_coverage("the cat ate", &dict());
        assert!((c - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(dictionary_coverage("", &dict()), 0.0);
    }
}
