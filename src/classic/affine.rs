use super::{map_letters, tokens, MODULUS};
use crate::dictionary::Dictionary;
use crate::error::{BreakError, BreakResult};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineBreak {
    pub a: i32,
    pub b: i32,
    pub plaintext: String,
}

/// Multiplicative inverse of `a` modulo `m`, if one exists.
pub fn mod_inverse(a: i32, m: i32) -> Option<i32> {
    let a = a.rem_euclid(m);
    (1..m).find(|x| (a * x) % m == 1)
}

pub fn is_coprime_with_26(a: i32) -> bool {
    mod_inverse(a, MODULUS).is_some()
}

fn require_inverse(a: i32) -> BreakResult<i32> {
    mod_inverse(a, MODULUS).ok_or_else(|| {
        BreakError::Config(format!("Affine multiplier {} is not coprime with 26", a))
    })
}

/// `x -> a*x + b (mod 26)`.
pub fn encrypt(text: &str, a: i32, b: i32) -> BreakResult<String> {
    require_inverse(a)?;
    Ok(map_letters(text, |x| a * x + b))
}

/// `y -> a^-1 * (y - b) (mod 26)`.
pub fn decrypt(text: &str, a: i32, b: i32) -> BreakResult<String> {
    let a_inv = require_inverse(a)?;
    Ok(decrypt_with_inverse(text, a_inv, b))
}

fn decrypt_with_inverse(text: &str, a_inv: i32, b: i32) -> String {
    map_letters(text, |y| a_inv * (y - b))
}

/// Enumerates all 312 valid `(a, b)` pairs and accepts the first one that
/// turns the first two tokens into dictionary words.
pub fn crack(ciphertext: &str, dictionary: &Dictionary) -> Option<AffineBreak> {
    let probes: Vec<&str> = tokens::first_words(ciphertext, 2)
        .into_iter()
        .map(tokens::letters_only)
        .filter(|w| !w.is_empty())
        .collect();
    if probes.is_empty() {
        return None;
    }

    for a in 1..MODULUS {
        let Some(a_inv) = mod_inverse(a, MODULUS) else {
            continue;
        };
        for b in 0..MODULUS {
            let all_known = probes
                .iter()
                .all(|w| dictionary.contains(&decrypt_with_inverse(w, a_inv, b)));
            if all_known {
                info!("🔓 Affine key found: a={}, b={}", a, b);
                return Some(AffineBreak {
                    a,
                    b,
                    plaintext: decrypt_with_inverse(ciphertext, a_inv, b),
                });
            }
        }
    }
    None
}
