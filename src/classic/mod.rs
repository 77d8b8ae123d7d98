//! Closed-form ciphers whose key space is small enough to enumerate.
//! Candidates are accepted when the decrypted sample words are all in the
//! dictionary.

pub mod affine;
pub mod caesar;
pub mod tokens;

pub use self::affine::AffineBreak;
pub use self::caesar::CaesarBreak;

const MODULUS: i32 = 26;

/// Applies `f` to the 0..26 offset of every ASCII letter, keeping case.
fn map_letters<F: Fn(i32) -> i32>(text: &str, f: F) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let x = c as i32 - base as i32;
                (base + f(x).rem_euclid(MODULUS) as u8) as char
            } else {
                c
            }
        })
        .collect()
}
