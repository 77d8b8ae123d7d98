use super::{map_letters, tokens, MODULUS};
use crate::dictionary::Dictionary;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarBreak {
    pub shift: u8,
    pub plaintext: String,
}

pub fn encrypt(text: &str, shift: i32) -> String {
    map_letters(text, |x| x + shift)
}

pub fn decrypt(text: &str, shift: i32) -> String {
    map_letters(text, |x| x - shift)
}

/// Tries all 26 shifts on the longest word and decrypts the whole text with
/// the first shift that yields a dictionary word.
pub fn crack(ciphertext: &str, dictionary: &Dictionary) -> Option<CaesarBreak> {
    let probe = tokens::longest_word(ciphertext)?;

    (0..MODULUS).find_map(|shift| {
        let candidate = decrypt(probe, shift);
        debug!("Caesar shift {:2}: '{}'", shift, candidate);
        if dictionary.contains(&candidate) {
            info!("🔓 Caesar shift {}: '{}' is a dictionary word", shift, candidate);
            Some(CaesarBreak {
                shift: shift as u8,
                plaintext: decrypt(ciphertext, shift).trim().to_string(),
            })
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_round_trip() {
        let text = "Veni, vidi, vici!";
        assert_eq!(decrypt(&encrypt(text, 3), 3), text);
        assert_eq!(encrypt("abc", 29), "def");
        assert_eq!(encrypt("abc", -1), "zab");
    }

    #[test]
    fn crack_finds_shift_from_longest_word() {
        let dict = Dictionary::from_words(["attack", "at", "dawn"]);
        let result = crack(&encrypt("Attack at dawn\n", 7), &dict).unwrap();
        assert_eq!(result.shift, 7);
        assert_eq!(result.plaintext, "Attack at dawn");
    }

    #[test]
    fn crack_without_words_gives_up() {
        let dict = Dictionary::from_words(["attack"]);
        assert!(crack("12 34", &dict).is_none());
        assert!(crack("qqqqqq", &dict).is_none());
    }
}
