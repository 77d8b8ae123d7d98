use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Runs of ASCII letters bounded by word boundaries.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Longest letter run; the first one wins ties.
pub fn longest_word(text: &str) -> Option<&str> {
    words(text).fold(None, |best, w| match best {
        Some(b) if b.len() >= w.len() => Some(b),
        _ => Some(w),
    })
}

/// First `n` whitespace-separated tokens, punctuation included.
pub fn first_words(text: &str, n: usize) -> Vec<&str> {
    text.split_whitespace().take(n).collect()
}

/// Strips leading and trailing non-letters from a token.
pub fn letters_only(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_ascii_alphabetic())
}
