use crate::ciphertext::CipherText;
use crate::key::Key;

/// A trial key together with the plaintext digit stream it produces.
///
/// The stream is only ever touched through swaps, which rewrite exactly the
/// positions of the two affected ciphertext symbols. A tentative swap must be
/// followed by [`Candidate::commit_swap`] or [`Candidate::revert_swap`].
pub struct Candidate<'a> {
    cipher: &'a CipherText,
    key: Key,
    plain: Vec<u8>,
    pending: Option<(usize, usize)>,
}

impl<'a> Candidate<'a> {
    pub fn new(cipher: &'a CipherText, key: Key) -> Self {
        let inverse = key.inverse();
        let plain = cipher
            .digits()
            .iter()
            .map(|&d| inverse.get(d as usize))
            .collect();

        Self {
            cipher,
            key,
            plain,
            pending: None,
        }
    }

    #[inline(always)]
    fn reassign(&mut self, symbol: u8, slot: usize) {
        for &p in self.cipher.positions(symbol) {
            self.plain[p] = slot as u8;
        }
    }

    /// Rewrites the stream as if slots `i` and `j` of the key were swapped.
    /// The key itself is left alone until the swap is committed.
    #[inline(always)]
    pub fn apply_swap(&mut self, i: usize, j: usize) {
        debug_assert!(self.pending.is_none(), "swap already pending");
        let a = self.key.get(i);
        let b = self.key.get(j);
        self.reassign(a, j);
        self.reassign(b, i);
        self.pending = Some((i, j));
    }

    #[inline(always)]
    pub fn revert_swap(&mut self, i: usize, j: usize) {
        debug_assert_eq!(self.pending, Some((i, j)));
        let a = self.key.get(i);
        let b = self.key.get(j);
        self.reassign(a, i);
        self.reassign(b, j);
        self.pending = None;
    }

    #[inline(always)]
    pub fn commit_swap(&mut self, i: usize, j: usize) {
        debug_assert_eq!(self.pending, Some((i, j)));
        self.key.swap(i, j);
        self.pending = None;
    }

    /// True when neither symbol at `i`/`j` occurs, so swapping them cannot
    /// change the stream.
    #[inline(always)]
    pub fn is_inert(&self, i: usize, j: usize) -> bool {
        self.cipher.positions(self.key.get(i)).is_empty()
            && self.cipher.positions(self.key.get(j)).is_empty()
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn plaintext(&self) -> &[u8] {
        &self.plain
    }
}
