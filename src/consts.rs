/// Number of symbols in a substitution alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Bits reserved per symbol when packing a quadgram into a table index.
/// 5 bits allow indices up to 31, so slots 26..=31 are never written.
pub const BITS_PER_SYMBOL: u32 = 5;

/// Size of the quadgram score table (32^4 slots).
pub const TABLE_SIZE: usize = 1 << (4 * BITS_PER_SYMBOL);

/// Modulus applied to the rolling index before shifting in the next symbol.
/// Drops the oldest symbol of the window.
pub const ROLLING_MASK: usize = 1 << (3 * BITS_PER_SYMBOL);

/// Sentinel for "byte is not part of the alphabet" in 256-entry lookups.
pub const SYMBOL_NOT_FOUND: u8 = 255;

/// Default number of random-restart trials.
pub const DEFAULT_RESTARTS: usize = 10_000;

/// Default number of ties with the global best before the search stops.
pub const DEFAULT_PLATEAU_LIMIT: usize = 3;

/// Marker substituted for tokens that fail dictionary validation.
pub const REDACTED_MARKER: &str = "[REDACTED]";
