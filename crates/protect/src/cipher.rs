//! Password-based encryption of paste content.
//!
//! # Wire format
//!
//! ```text
//! ENC:<base64(salt || nonce || ciphertext+tag)>
//! ```
//!
//! The `ENC:` marker lets the paste viewer distinguish protected payloads
//! from plaintext with a cheap prefix check before prompting for a password.
//! The salt feeds Argon2id key derivation; the nonce initialises the cipher.
//! Both are drawn fresh from a CSPRNG on every call, so encrypting the same
//! plaintext with the same password twice yields different ciphertext.
//!
//! **Algorithm choice:** AES-256-GCM-SIV (RFC 8452). Authentication makes
//! wrong-password rejection deterministic — a bad key fails the tag check
//! instead of yielding garbage plaintext.

use aes_gcm_siv::{
    aead::{Aead, KeyInit},
    Aes256GcmSiv, Nonce,
};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::ProtectError;

/// Prefix identifying a string as produced by [`encrypt`].
///
/// Reserved, process-wide constant; never user-controlled.
pub const MARKER: &str = "ENC:";

/// Byte length of the per-encryption KDF salt.
pub const SALT_LEN: usize = 16;

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the derived AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of the AES-GCM-SIV authentication tag.
const TAG_LEN: usize = 16;

// Argon2id cost parameters, interactive-use profile. Fixed process-wide so
// that password + salt always re-derives the same key.
const ARGON2_MEMORY_KIB: u32 = 19 * 1024;
const ARGON2_ITERATIONS: u32 = 2;
const ARGON2_PARALLELISM: u32 = 1;

/// Key bytes derived from a password.
///
/// Overwritten with zeroes on drop so plaintext key material does not
/// outlive the call that derived it.
struct DerivedKey([u8; KEY_LEN]);

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an AES-256 key from `password` and `salt` via Argon2id.
fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey, argon2::Error> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        Some(KEY_LEN),
    )?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2.hash_password_into(password.as_bytes(), salt, &mut key)?;
    Ok(DerivedKey(key))
}

/// Encrypt `plaintext` with a key derived from `password`.
///
/// Salt and nonce come from the OS CSPRNG; see [`encrypt_with`] for the
/// injectable-randomness variant used by deterministic tests.
///
/// # Errors
///
/// Returns [`ProtectError::InvalidArgument`] if either input is empty and
/// [`ProtectError::EncryptionFailure`] on an underlying crypto failure.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, ProtectError> {
    encrypt_with(plaintext, password, &mut OsRng)
}

/// [`encrypt`] with a caller-supplied randomness source.
///
/// Production callers use [`encrypt`]; tests substitute a seeded RNG to get
/// reproducible ciphertext. The `CryptoRng` bound keeps non-cryptographic
/// sources out of the production path by construction.
pub fn encrypt_with<R>(plaintext: &str, password: &str, rng: &mut R) -> Result<String, ProtectError>
where
    R: RngCore + CryptoRng,
{
    if plaintext.is_empty() {
        return Err(ProtectError::InvalidArgument("plaintext must not be empty"));
    }
    if password.is_empty() {
        return Err(ProtectError::InvalidArgument("password must not be empty"));
    }

    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce_bytes);

    let key =
        derive_key(password, &salt).map_err(|e| ProtectError::EncryptionFailure(e.to_string()))?;
    let cipher = Aes256GcmSiv::new_from_slice(&key.0)
        .map_err(|e| ProtectError::EncryptionFailure(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
        .map_err(|_| ProtectError::EncryptionFailure("aead operation failed".into()))?;

    let mut payload = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&nonce_bytes);
    payload.extend_from_slice(&ciphertext);

    Ok(format!("{MARKER}{}", STANDARD.encode(payload)))
}

/// Decrypt a string produced by [`encrypt`] back to its plaintext.
///
/// Input lacking the `ENC:` marker is treated as a bare payload and decoded
/// whole. This matches stored content that predates tagging — a legacy
/// accommodation, kept deliberately.
///
/// # Errors
///
/// Returns [`ProtectError::InvalidArgument`] if either input is empty.
/// Everything else — malformed base64, a truncated payload, an
/// authentication failure, or decrypted bytes that are not valid non-empty
/// UTF-8 — collapses to [`ProtectError::DecryptionFailure`].
pub fn decrypt(ciphertext: &str, password: &str) -> Result<String, ProtectError> {
    if ciphertext.is_empty() {
        return Err(ProtectError::InvalidArgument(
            "ciphertext must not be empty",
        ));
    }
    if password.is_empty() {
        return Err(ProtectError::InvalidArgument("password must not be empty"));
    }

    let encoded = ciphertext.strip_prefix(MARKER).unwrap_or(ciphertext);

    let payload = STANDARD
        .decode(encoded)
        .map_err(|_| ProtectError::DecryptionFailure)?;
    if payload.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
        return Err(ProtectError::DecryptionFailure);
    }
    let (salt, rest) = payload.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let key = derive_key(password, salt).map_err(|_| ProtectError::DecryptionFailure)?;
    let cipher =
        Aes256GcmSiv::new_from_slice(&key.0).map_err(|_| ProtectError::DecryptionFailure)?;

    let plaintext_bytes = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| ProtectError::DecryptionFailure)?;

    let plaintext = String::from_utf8(plaintext_bytes).map_err(|_| ProtectError::DecryptionFailure)?;
    // An empty result cannot come from `encrypt`; treat it as wrong password
    // or corrupted data, as the viewer would.
    if plaintext.is_empty() {
        return Err(ProtectError::DecryptionFailure);
    }
    Ok(plaintext)
}

/// Returns `true` iff `content` starts with the [`MARKER`] prefix.
///
/// Total over all inputs; the empty string returns `false`. The paste viewer
/// calls this on fetched content to decide whether to ask for a password.
pub fn is_protected(content: &str) -> bool {
    content.starts_with(MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn encrypt_decrypt_round_trip() {
        let encrypted = encrypt("hello world", "secret").unwrap();
        assert!(encrypted.starts_with(MARKER));
        let decrypted = decrypt(&encrypted, "secret").unwrap();
        assert_eq!(decrypted, "hello world");
    }

    #[test]
    fn round_trip_preserves_unicode() {
        let plaintext = "héllo — 世界\nsecond line";
        let encrypted = encrypt(plaintext, "pw").unwrap();
        assert_eq!(decrypt(&encrypted, "pw").unwrap(), plaintext);
    }

    #[test]
    fn repeated_encryption_differs() {
        // Fresh salt + nonce per call: identical inputs must not produce
        // identical ciphertext.
        let a = encrypt("same input", "same password").unwrap();
        let b = encrypt("same input", "same password").unwrap();
        assert_ne!(a, b);
        assert_eq!(decrypt(&a, "same password").unwrap(), "same input");
        assert_eq!(decrypt(&b, "same password").unwrap(), "same input");
    }

    #[test]
    fn wrong_password_fails_decryption() {
        let encrypted = encrypt("hello world", "secret").unwrap();
        let err = decrypt(&encrypted, "wrong").unwrap_err();
        assert!(matches!(err, ProtectError::DecryptionFailure));
    }

    #[test]
    fn empty_inputs_rejected_before_crypto() {
        assert!(matches!(
            encrypt("", "pw").unwrap_err(),
            ProtectError::InvalidArgument(_)
        ));
        assert!(matches!(
            encrypt("text", "").unwrap_err(),
            ProtectError::InvalidArgument(_)
        ));
        assert!(matches!(
            decrypt("", "pw").unwrap_err(),
            ProtectError::InvalidArgument(_)
        ));
        assert!(matches!(
            decrypt("ENC:abc", "").unwrap_err(),
            ProtectError::InvalidArgument(_)
        ));
    }

    #[test]
    fn decrypt_accepts_payload_without_marker() {
        // Content stored before tagging was introduced has no prefix.
        let encrypted = encrypt("legacy content", "pw").unwrap();
        let bare = encrypted.strip_prefix(MARKER).unwrap();
        assert_eq!(decrypt(bare, "pw").unwrap(), "legacy content");
    }

    #[test]
    fn malformed_base64_rejected() {
        let err = decrypt("ENC:!!!not-base64!!!", "pw").unwrap_err();
        assert!(matches!(err, ProtectError::DecryptionFailure));
    }

    #[test]
    fn truncated_payload_rejected() {
        let short = format!("{MARKER}{}", STANDARD.encode([0u8; 8]));
        let err = decrypt(&short, "pw").unwrap_err();
        assert!(matches!(err, ProtectError::DecryptionFailure));
    }

    #[test]
    fn tampered_ciphertext_fails_auth() {
        let encrypted = encrypt("tamper me", "pw").unwrap();
        let mut payload = STANDARD
            .decode(encrypted.strip_prefix(MARKER).unwrap())
            .unwrap();
        // Flip a byte past the salt and nonce, inside the ciphertext.
        let idx = SALT_LEN + NONCE_LEN;
        payload[idx] ^= 0xFF;
        let tampered = format!("{MARKER}{}", STANDARD.encode(payload));
        assert!(matches!(
            decrypt(&tampered, "pw").unwrap_err(),
            ProtectError::DecryptionFailure
        ));
    }

    #[test]
    fn seeded_rng_reproduces_ciphertext() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let a = encrypt_with("deterministic", "pw", &mut rng1).unwrap();
        let b = encrypt_with("deterministic", "pw", &mut rng2).unwrap();
        assert_eq!(a, b);
        assert_eq!(decrypt(&a, "pw").unwrap(), "deterministic");
    }

    #[test]
    fn is_protected_checks_marker_only() {
        assert!(!is_protected("hello world"));
        assert!(!is_protected(""));
        assert!(!is_protected("ENC"));
        assert!(!is_protected("enc:lowercase"));
        assert!(is_protected("ENC:abc123=="));
        assert!(is_protected(&encrypt("p", "pw").unwrap()));
    }
}
