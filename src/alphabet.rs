use crate::consts::{ALPHABET_LEN, SYMBOL_NOT_FOUND};
use crate::error::{BreakError, BreakResult};

pub const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyz";

/// Fixed bijection between 26 symbols and the indices 0..=25.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    lookup: [u8; 256],
}

impl Alphabet {
    pub fn english() -> Self {
        // ENGLISH is 26 distinct lowercase letters
        Self::build(ENGLISH.as_bytes())
    }

    pub fn new(symbols: &str) -> BreakResult<Self> {
        let bytes = symbols.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(BreakError::Config(format!(
                "Alphabet must have {} symbols, got {}",
                ALPHABET_LEN,
                symbols.chars().count()
            )));
        }

        let mut seen = [false; 256];
        for &b in bytes {
            if !b.is_ascii_lowercase() {
                return Err(BreakError::Config(format!(
                    "Alphabet symbol '{}' is not a lowercase ASCII letter",
                    b as char
                )));
            }
            if seen[b as usize] {
                return Err(BreakError::Config(format!(
                    "Alphabet symbol '{}' appears more than once",
                    b as char
                )));
            }
            seen[b as usize] = true;
        }

        Ok(Self::build(bytes))
    }

    fn build(bytes: &[u8]) -> Self {
        let mut symbols = [0u8; ALPHABET_LEN];
        let mut lookup = [SYMBOL_NOT_FOUND; 256];
        for (i, &b) in bytes.iter().enumerate() {
            symbols[i] = b;
            lookup[b as usize] = i as u8;
            lookup[b.to_ascii_uppercase() as usize] = i as u8;
        }
        Self { symbols, lookup }
    }

    /// Index of `c`, ignoring case. `None` for anything outside the alphabet.
    #[inline(always)]
    pub fn index_of(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.lookup[c as usize] {
            SYMBOL_NOT_FOUND => None,
            idx => Some(idx),
        }
    }

    #[inline(always)]
    pub fn symbol(&self, idx: u8) -> char {
        self.symbols[idx as usize] as char
    }

    pub fn len(&self) -> usize {
        ALPHABET_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_str(&self) -> &str {
        // Constructors only accept ASCII
        std::str::from_utf8(&self.symbols).unwrap_or(ENGLISH)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_indices_are_dense() {
        let a = Alphabet::english();
        assert_eq!(a.index_of('a'), Some(0));
        assert_eq!(a.index_of('Z'), Some(25));
        assert_eq!(a.index_of('!'), None);
        assert_eq!(a.index_of('é'), None);
        assert_eq!(a.symbol(4), 'e');
        assert_eq!(a.as_str(), ENGLISH);
    }

    #[test]
    fn reordered_alphabet_is_accepted() {
        let a = Alphabet::new("zyxwvutsrqponmlkjihgfedcba").unwrap();
        assert_eq!(a.index_of('z'), Some(0));
        assert_eq!(a.symbol(25), 'a');
    }

    #[test]
    fn rejects_bad_alphabets() {
        assert!(matches!(
            Alphabet::new("abc"),
            Err(BreakError::Config(_))
        ));
        assert!(matches!(
            Alphabet::new("aacdefghijklmnopqrstuvwxyz"),
            Err(BreakError::Config(_))
        ));
        assert!(matches!(
            Alphabet::new("Abcdefghijklmnopqrstuvwxyz"),
            Err(BreakError::Config(_))
        ));
    }
}
