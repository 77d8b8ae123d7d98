use crate::alphabet::Alphabet;
use crate::applier::KeyApplier;
use crate::ciphertext::CipherText;
use crate::config::SearchParams;
use crate::dictionary::Dictionary;
use crate::error::BreakResult;
use crate::model::QuadgramTable;
use crate::optimizer::{OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback};
use std::sync::Arc;
use tracing::info;

/// Outcome of a full monoalphabetic break.
#[derive(Debug, Clone)]
pub struct MonoBreak {
    /// Recovered key, written as "ciphertext symbol for a, for b, ...".
    pub key: String,
    pub score: u64,
    pub plaintext: String,
    pub search: OptimizationResult,
}

/// Builds the quadgram model from `corpus`, recovers a key for `ciphertext`
/// and decrypts it. Inputs are validated here; the search itself never fails.
pub fn break_monoalphabetic<CB: ProgressCallback>(
    ciphertext: &str,
    corpus: &Dictionary,
    alphabet: &Alphabet,
    params: &SearchParams,
    seed: Option<u64>,
    callback: CB,
) -> BreakResult<MonoBreak> {
    params.validate()?;

    let table = Arc::new(QuadgramTable::from_words(alphabet, corpus.words())?);
    let cipher = Arc::new(CipherText::new(alphabet, ciphertext));
    info!(
        "🔐 Ciphertext: {} symbols, {} distinct",
        cipher.len(),
        cipher.distinct_symbols()
    );

    let optimizer = Optimizer::new(table, cipher, OptimizationOptions::from(params));
    let search = optimizer.run(seed, callback);

    let applier = KeyApplier::from_key(alphabet, &search.key.inverse());
    let plaintext = applier.apply(ciphertext);

    Ok(MonoBreak {
        key: search.key.to_symbols(alphabet),
        score: search.score,
        plaintext,
        search,
    })
}
