pub mod builder;

pub use self::builder::QuadgramCounter;

use crate::alphabet::Alphabet;
use crate::consts::BITS_PER_SYMBOL;
use crate::error::BreakResult;
use tracing::info;

/// Packs four symbol indices into a table index, 5 bits per symbol.
#[inline(always)]
pub fn pack_quadgram(a: u8, b: u8, c: u8, d: u8) -> usize {
    ((a as usize) << (3 * BITS_PER_SYMBOL))
        | ((b as usize) << (2 * BITS_PER_SYMBOL))
        | ((c as usize) << BITS_PER_SYMBOL)
        | d as usize
}

/// Immutable quadgram score table. Built once, then shared read-only by
/// every search trial.
pub struct QuadgramTable {
    scores: Box<[u32]>,
    observed: usize,
}

impl QuadgramTable {
    /// Counts and normalizes every quadgram in `words`.
    pub fn from_words<I, S>(alphabet: &Alphabet, words: I) -> BreakResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = QuadgramCounter::new(alphabet);
        counter.add_words(words);
        let table = counter.normalize()?;
        info!(
            "📚 Quadgram table ready: {} observed quadgrams",
            table.observed
        );
        Ok(table)
    }

    pub(crate) fn from_scores(scores: Box<[u32]>, observed: usize) -> Self {
        Self { scores, observed }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> u32 {
        self.scores[index]
    }

    /// Score of a literal 4-letter string, or `None` if it is not exactly four
    /// alphabet symbols.
    pub fn score_of(&self, alphabet: &Alphabet, quadgram: &str) -> Option<u32> {
        let idx: Vec<u8> = quadgram
            .chars()
            .map(|c| alphabet.index_of(c))
            .collect::<Option<_>>()?;
        match idx[..] {
            [a, b, c, d] => Some(self.get(pack_quadgram(a, b, c, d))),
            _ => None,
        }
    }

    pub fn nonzero_count(&self) -> usize {
        self.observed
    }

    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| (s > 0).then_some((i, s)))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
