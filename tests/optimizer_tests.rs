mod common;

use quadbreak::alphabet::Alphabet;
use quadbreak::ciphertext::CipherText;
use quadbreak::config::SearchParams;
use quadbreak::dictionary::Dictionary;
use quadbreak::error::BreakError;
use quadbreak::fitness;
use quadbreak::key::Key;
use quadbreak::model::QuadgramTable;
use quadbreak::optimizer::{
    HillClimber, OptimizationOptions, Optimizer, ProgressCallback, SilentProgress,
};
use quadbreak::pipeline::break_monoalphabetic;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn fixtures() -> (Alphabet, Arc<QuadgramTable>, Arc<CipherText>) {
    let alphabet = Alphabet::english();
    let table = QuadgramTable::from_words(&alphabet, common::corpus_words()).unwrap();
    let ciphertext = common::encrypt(common::SAMPLE_TEXT, common::SECRET_KEY);
    let cipher = CipherText::new(&alphabet, &ciphertext);
    (alphabet, Arc::new(table), Arc::new(cipher))
}

#[test]
fn test_recovers_at_least_true_key_score() {
    let alphabet = Alphabet::english();
    let ciphertext = common::encrypt(common::SAMPLE_TEXT, common::SECRET_KEY);
    let corpus = Dictionary::from_words(common::corpus_words());
    let params = SearchParams {
        restarts: 300,
        plateau_limit: 3,
        threads: 0,
        max_time_secs: None,
    };

    let table = QuadgramTable::from_words(&alphabet, corpus.words()).unwrap();
    let truth = CipherText::new(&alphabet, common::SAMPLE_TEXT);
    let true_score = fitness::score(truth.digits(), &table);

    let result =
        break_monoalphabetic(&ciphertext, &corpus, &alphabet, &params, Some(42), SilentProgress)
            .unwrap();

    assert!(
        result.score >= true_score,
        "recovered {} < true {}",
        result.score,
        true_score
    );
    assert!(!result.search.is_degenerate());
}

#[test]
fn test_climb_from_true_key_does_not_regress() {
    let (_, table, cipher) = fixtures();
    let climber = HillClimber::with_key(&cipher, &table, common::secret_key());
    let start = climber.score();
    let outcome = climber.climb();
    assert!(outcome.score >= start);
}

#[test]
fn test_climb_never_lowers_score() {
    let (_, table, cipher) = fixtures();
    let mut rng = fastrand::Rng::with_seed(17);
    let mut climber = HillClimber::new(&cipher, &table, &mut rng);

    let mut last = climber.score();
    while let Some(next) = climber.step() {
        assert!(next > last);
        last = next;
    }
    assert!(climber.find_improving_swap().is_none());
    assert_eq!(fitness::score(climber.plaintext(), &table), last);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn test_seeded_search_ignores_thread_count(#[case] threads: usize) {
    let (_, table, cipher) = fixtures();
    let baseline = OptimizationOptions::builder()
        .restarts(12)
        .plateau_limit(50)
        .num_threads(2)
        .build();
    let expected = Optimizer::new(table.clone(), cipher.clone(), baseline).run(Some(7), SilentProgress);

    let opts = OptimizationOptions::builder()
        .restarts(12)
        .plateau_limit(50)
        .num_threads(threads)
        .build();
    let actual = Optimizer::new(table.clone(), cipher.clone(), opts).run(Some(7), SilentProgress);

    assert_eq!(actual.key, expected.key);
    assert_eq!(actual.score, expected.score);
    assert_eq!(actual.trials, 12);

    // The returned key is a local optimum: one more pass finds nothing.
    let mut probe = HillClimber::with_key(&cipher, &table, actual.key);
    assert_eq!(probe.score(), actual.score);
    assert!(probe.find_improving_swap().is_none());
}

struct StopAfterFirstBatch(AtomicUsize);

impl ProgressCallback for StopAfterFirstBatch {
    fn on_progress(&self, _trials: usize, _best_score: u64, _best_key: &Key) -> bool {
        self.0.fetch_add(1, Ordering::SeqCst);
        false
    }
}

#[test]
fn test_callback_can_cancel_search() {
    let (_, table, cipher) = fixtures();
    let opts = OptimizationOptions::builder()
        .restarts(100)
        .plateau_limit(100)
        .num_threads(2)
        .build();
    let callback = StopAfterFirstBatch(AtomicUsize::new(0));
    let result = Optimizer::new(table, cipher, opts).run(Some(1), &callback);

    assert!(result.cancelled);
    assert_eq!(result.trials, 2);
    assert_eq!(callback.0.load(Ordering::SeqCst), 1);
}

#[test]
fn test_short_key_is_rejected() {
    let alphabet = Alphabet::english();
    let err = Key::parse(&alphabet, "abcdefghijklmnopqrstuvwxy").unwrap_err();
    assert!(matches!(err, BreakError::Config(_)));
}

#[test]
fn test_invalid_params_are_rejected() {
    let corpus = Dictionary::from_words(common::corpus_words());
    let params = SearchParams {
        restarts: 0,
        ..SearchParams::default()
    };
    let err = break_monoalphabetic(
        "abcd",
        &corpus,
        &Alphabet::english(),
        &params,
        None,
        SilentProgress,
    )
    .unwrap_err();
    assert!(matches!(err, BreakError::Config(_)));
}
