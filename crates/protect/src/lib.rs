//! Content protection and key generation for paste payloads.
//!
//! Two independent concerns share this crate:
//!
//! - [`cipher`] — password-based encryption of paste content with a
//!   self-describing `ENC:` wire format, applied before content leaves the
//!   client and reversed before display.
//! - [`keygen`] — short random alphanumeric identifiers used as paste keys.
//!
//! All operations are synchronous and stateless; the only shared resources
//! are the OS CSPRNG (encryption salt/nonce) and the thread-local RNG
//! (identifiers), both safe for concurrent use.

pub mod cipher;
pub mod error;
pub mod keygen;

pub use cipher::{decrypt, encrypt, encrypt_with, is_protected, MARKER};
pub use error::ProtectError;
pub use keygen::{generate, generate_with, DEFAULT_KEY_LEN};
