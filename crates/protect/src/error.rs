//! Error types for the content protection core.

use thiserror::Error;

/// Errors produced by [`crate::cipher`].
///
/// `decrypt` deliberately collapses every failure past input validation into
/// the single [`ProtectError::DecryptionFailure`] kind: a password-derived
/// key gives no oracle to distinguish a wrong password from tampered or
/// corrupted ciphertext without weakening security, so the caller is told
/// neither.
#[derive(Debug, Error)]
pub enum ProtectError {
    /// An empty plaintext, password, or ciphertext was passed in. The check
    /// runs before any cryptographic work.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Key derivation or the cipher itself failed during encryption — an
    /// environment problem (e.g. randomness source unavailable), not bad
    /// caller input.
    #[error("encryption failed: {0}")]
    EncryptionFailure(String),

    /// Malformed encoding, authentication failure, or a non-text result.
    /// Wrong password and corrupted data are indistinguishable by design.
    #[error("wrong password or corrupted data")]
    DecryptionFailure,
}
