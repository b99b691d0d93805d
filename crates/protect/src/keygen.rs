//! Random alphanumeric identifiers used as paste keys.
//!
//! Identifiers are short link fragments, not secrets — a general-purpose RNG
//! is sufficient, and no uniqueness is enforced here. Collision handling is
//! the backend's job (duplicate-key rejection at persistence time).

use rand::Rng;

/// The 62-character identifier alphabet.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default identifier length.
pub const DEFAULT_KEY_LEN: usize = 8;

/// Generate a random identifier of `length` characters from [`ALPHABET`].
///
/// `generate(0)` returns the empty string; there are no error conditions.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

/// [`generate`] with a caller-supplied RNG, for deterministic tests.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
