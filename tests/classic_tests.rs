mod common;

use quadbreak::classic::{affine, caesar};
use quadbreak::dictionary::Dictionary;
use quadbreak::redact;
use rstest::rstest;

fn dictionary() -> Dictionary {
    Dictionary::from_words(common::corpus_words())
}

#[rstest]
#[case(1)]
#[case(13)]
#[case(25)]
fn test_caesar_crack_recovers_shift(#[case] shift: i32) {
    let plain = "The stranger arrived on the last train of the evening.";
    let result = caesar::crack(&caesar::encrypt(plain, shift), &dictionary()).unwrap();
    assert_eq!(i32::from(result.shift), shift);
    assert_eq!(result.plaintext, plain);
}

#[rstest]
#[case(3, 7)]
#[case(5, 0)]
#[case(25, 11)]
fn test_affine_crack_recovers_plaintext(#[case] a: i32, #[case] b: i32) {
    let plain = "Every morning the fishing boats went out.";
    let ct = affine::encrypt(plain, a, b).unwrap();
    let result = affine::crack(&ct, &dictionary()).unwrap();
    assert_eq!(result.plaintext, plain);
}

#[test]
fn test_unknown_words_are_redacted() {
    let out = redact::validate_text("The harbour glorp was quiet, 42 boats.", &dictionary());
    assert!(out.contains("[REDACTED]"));
    assert!(out.starts_with("The harbour"));
    assert!(out.contains("42"));
}

#[test]
fn test_coverage_of_known_text_is_full() {
    let dict = dictionary();
    assert_eq!(redact::dictionary_coverage(common::SAMPLE_TEXT, &dict), 1.0);
    assert_eq!(redact::dictionary_coverage("", &dict), 0.0);
}
