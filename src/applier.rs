use crate::alphabet::Alphabet;
use crate::consts::ALPHABET_LEN;
use crate::error::{BreakError, BreakResult};
use crate::key::Key;

/// Direct symbol-to-symbol substitution over an alphabet.
///
/// Case is carried over from the input character; anything outside the
/// alphabet passes through untouched.
#[derive(Debug, Clone)]
pub struct KeyApplier {
    alphabet: Alphabet,
    mapping: [u8; ALPHABET_LEN],
}

impl KeyApplier {
    /// Maps `alphabet[i]` to `key[i]`.
    pub fn new(alphabet: &Alphabet, key: &str) -> BreakResult<Self> {
        let key = Key::parse(alphabet, key).map_err(|e| match e {
            BreakError::Config(msg) => BreakError::Config(format!("Key Applier: {}", msg)),
            other => other,
        })?;
        Ok(Self::from_key(alphabet, &key))
    }

    /// Maps `key[i]` back to `alphabet[i]`, undoing [`KeyApplier::new`].
    pub fn decrypting(alphabet: &Alphabet, key: &str) -> BreakResult<Self> {
        let key = Key::parse(alphabet, key)?;
        Ok(Self::from_key(alphabet, &key.inverse()))
    }

    pub fn from_key(alphabet: &Alphabet, key: &Key) -> Self {
        let mut mapping = [0u8; ALPHABET_LEN];
        mapping.copy_from_slice(key.as_slice());
        Self {
            alphabet: alphabet.clone(),
            mapping,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| match self.alphabet.index_of(c) {
                Some(idx) => {
                    let out = self.alphabet.symbol(self.mapping[idx as usize]);
                    if c.is_ascii_uppercase() {
                        out.to_ascii_uppercase()
                    } else {
                        out
                    }
                }
                None => c,
            })
            .collect()
    }
}
