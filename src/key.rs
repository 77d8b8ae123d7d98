use crate::alphabet::Alphabet;
use crate::consts::ALPHABET_LEN;
use crate::error::{BreakError, BreakResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A substitution key: a permutation of `0..26`.
///
/// Slot `p` holds the ciphertext symbol that decrypts to plaintext symbol `p`,
/// so `key.to_symbols()` reads as "the ciphertext letter for a, for b, ...".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key([u8; ALPHABET_LEN]);

impl Key {
    pub fn identity() -> Self {
        let mut slots = [0u8; ALPHABET_LEN];
        for (i, s) in slots.iter_mut().enumerate() {
            *s = i as u8;
        }
        Key(slots)
    }

    /// Uniformly random permutation drawn from `rng`.
    pub fn random(rng: &mut Rng) -> Self {
        let mut key = Self::identity();
        rng.shuffle(&mut key.0);
        key
    }

    pub fn from_indices(slots: [u8; ALPHABET_LEN]) -> BreakResult<Self> {
        let key = Key(slots);
        if !key.is_permutation() {
            return Err(BreakError::Config(format!(
                "Key {:?} is not a permutation of 0..{}",
                slots, ALPHABET_LEN
            )));
        }
        Ok(key)
    }

    /// Parses a key written with the alphabet's own symbols.
    pub fn parse(alphabet: &Alphabet, text: &str) -> BreakResult<Self> {
        let len = text.chars().count();
        if len != alphabet.len() {
            return Err(BreakError::Config(format!(
                "Key length {} does not match alphabet length {}",
                len,
                alphabet.len()
            )));
        }

        let mut slots = [0u8; ALPHABET_LEN];
        for (i, c) in text.chars().enumerate() {
            slots[i] = alphabet.index_of(c).ok_or_else(|| {
                BreakError::Config(format!("Key symbol '{}' is not in the alphabet", c))
            })?;
        }
        Self::from_indices(slots)
    }

    pub fn to_symbols(&self, alphabet: &Alphabet) -> String {
        self.0.iter().map(|&s| alphabet.symbol(s)).collect()
    }

    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; ALPHABET_LEN];
        for (p, &s) in self.0.iter().enumerate() {
            inv[s as usize] = p as u8;
        }
        Key(inv)
    }

    #[inline(always)]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    #[inline(always)]
    pub fn get(&self, slot: usize) -> u8 {
        self.0[slot]
    }

    /// Slot holding `symbol`. Linear scan; the optimizer keeps its own
    /// inverse instead of calling this in hot loops.
    pub fn position_of(&self, symbol: u8) -> Option<usize> {
        self.0.iter().position(|&s| s == symbol)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &s in &self.0 {
            let s = s as usize;
            if s >= ALPHABET_LEN || seen[s] {
                return false;
            }
            seen[s] = true;
        }
        true
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.to_symbols(&Alphabet::english()))
    }
}
