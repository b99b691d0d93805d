//! HTTP client for the paste backend.
//!
//! Wraps the backend's two operations — `POST /pastes` and
//! `GET /pastes/{key}` — behind [`PasteClient`], with the wire DTOs in
//! [`protocol`]. Encryption happens before content reaches this crate; the
//! client ships whatever payload it is given.

pub mod api;
pub mod error;
pub mod protocol;

pub use api::PasteClient;
pub use error::ClientError;
pub use protocol::{CreatePaste, CreatedPaste, Paste};
