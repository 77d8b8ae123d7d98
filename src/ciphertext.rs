use crate::alphabet::Alphabet;
use crate::consts::ALPHABET_LEN;

/// Ciphertext reduced to alphabet indices, plus where each symbol occurs.
///
/// Both halves are fixed at construction. Search trials share one instance
/// across threads.
#[derive(Debug, Clone)]
pub struct CipherText {
    digits: Vec<u8>,
    positions: [Vec<usize>; ALPHABET_LEN],
}

impl CipherText {
    pub fn new(alphabet: &Alphabet, text: &str) -> Self {
        let digits: Vec<u8> = text.chars().filter_map(|c| alphabet.index_of(c)).collect();

        let mut positions: [Vec<usize>; ALPHABET_LEN] = std::array::from_fn(|_| Vec::new());
        for (i, &d) in digits.iter().enumerate() {
            positions[d as usize].push(i);
        }

        Self { digits, positions }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Positions in the digit stream holding ciphertext symbol `symbol`, ascending.
    #[inline(always)]
    pub fn positions(&self, symbol: u8) -> &[usize] {
        &self.positions[symbol as usize]
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of distinct symbols that actually occur.
    pub fn distinct_symbols(&self) -> usize {
        self.positions.iter().filter(|p| !p.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_and_punctuation() {
        let alphabet = Alphabet::english();
        let ct = CipherText::new(&alphabet, "Ab, a!\nB?");
        assert_eq!(ct.digits(), &[0, 1, 0, 1]);
        assert_eq!(ct.positions(0), &[0, 2]);
        assert_eq!(ct.positions(1), &[1, 3]);
        assert!(ct.positions(2).is_empty());
        assert_eq!(ct.distinct_symbols(), 2);
    }

    #[test]
    fn position_index_covers_every_digit_once() {
        let alphabet = Alphabet::english();
        let ct = CipherText::new(&alphabet, "the quick brown fox jumps over the lazy dog");
        let total: usize = (0..26u8).map(|s| ct.positions(s).len()).sum();
        assert_eq!(total, ct.len());
        for s in 0..26u8 {
            for &p in ct.positions(s) {
                assert_eq!(ct.digits()[p], s);
            }
        }
    }

    #[test]
    fn empty_text() {
        let ct = CipherText::new(&Alphabet::english(), "1234 ...");
        assert!(ct.is_empty());
        assert_eq!(ct.distinct_symbols(), 0);
    }
}
