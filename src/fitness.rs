use crate::consts::{BITS_PER_SYMBOL, ROLLING_MASK};
use crate::model::{pack_quadgram, QuadgramTable};

/// Sum of table scores over every 4-symbol window of `stream`.
///
/// Keeps a rolling packed index: the oldest symbol is masked off and the next
/// one shifted in, so each window costs one lookup.
#[inline]
pub fn score(stream: &[u8], table: &QuadgramTable) -> u64 {
    if stream.len() < 4 {
        return 0;
    }

    let mut index = ((stream[0] as usize) << (2 * BITS_PER_SYMBOL))
        | ((stream[1] as usize) << BITS_PER_SYMBOL)
        | stream[2] as usize;

    let mut total = 0u64;
    for &next in &stream[3..] {
        index = ((index % ROLLING_MASK) << BITS_PER_SYMBOL) + next as usize;
        total += table.get(index) as u64;
    }
    total
}

/// Same result as [`score`], packing each window from scratch.
pub fn score_naive(stream: &[u8], table: &QuadgramTable) -> u64 {
    stream
        .windows(4)
        .map(|w| table.get(pack_quadgram(w[0], w[1], w[2], w[3])) as u64)
        .sum()
}
