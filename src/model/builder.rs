use crate::alphabet::Alphabet;
use crate::consts::TABLE_SIZE;
use crate::error::{BreakError, BreakResult};
use crate::model::{pack_quadgram, QuadgramTable};
use tracing::debug;

/// Raw quadgram counts gathered from a corpus, before normalization.
pub struct QuadgramCounter<'a> {
    alphabet: &'a Alphabet,
    counts: Vec<u64>,
    words_seen: usize,
}

impl<'a> QuadgramCounter<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            counts: vec![0; TABLE_SIZE],
            words_seen: 0,
        }
    }

    /// Counts every 4-symbol window of `word` whose symbols are all in the
    /// alphabet. Words shorter than 4 characters are ignored.
    pub fn add_word(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        let symbols: Vec<Option<u8>> = word.chars().map(|c| self.alphabet.index_of(c)).collect();
        if symbols.len() < 4 {
            return;
        }
        self.words_seen += 1;

        for w in symbols.windows(4) {
            if let [Some(a), Some(b), Some(c), Some(d)] = w {
                self.counts[pack_quadgram(*a, *b, *c, *d)] += 1;
            }
        }
    }

    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            self.add_word(w.as_ref());
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn observed(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn count_at(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Log-probability normalization.
    ///
    /// With `S` the total count and `m` the rarest observed count, every
    /// observed entry becomes `ln(c/S) - ln(m/10/S)`, then is rescaled so the
    /// frequency-weighted mean lands on 1000. Unobserved slots stay 0.
    pub fn normalize(self) -> BreakResult<QuadgramTable> {
        let total = self.total();
        let min_nonzero = self.counts.iter().copied().filter(|&c| c > 0).min();

        let min_nonzero = match min_nonzero {
            Some(m) if total > 0 => m,
            _ => return Err(BreakError::NoTrainingData),
        };

        let total = total as f64;
        let offset = (min_nonzero as f64 / 10.0 / total).ln();

        let log_score = |c: u64| {
            let p = c as f64 / total;
            (p, p.ln() - offset)
        };

        let mut weighted_avg = 0.0;
        for &c in self.counts.iter().filter(|&&c| c > 0) {
            let (p, v) = log_score(c);
            weighted_avg += p * v;
        }

        let mut scores = vec![0u32; TABLE_SIZE];
        let mut observed = 0;
        for (slot, &c) in scores.iter_mut().zip(self.counts.iter()) {
            if c > 0 {
                let (_, v) = log_score(c);
                *slot = (v / weighted_avg * 1000.0).round_ties_even() as u32;
                observed += 1;
            }
        }

        debug!(
            "Quadgram model: {} words, {} observations, {} distinct quadgrams (avg log-score {:.4})",
            self.words_seen, total, observed, weighted_avg
        );

        Ok(QuadgramTable::from_scores(scores.into_boxed_slice(), observed))
    }
}
