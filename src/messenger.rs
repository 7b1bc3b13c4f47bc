//! Decode Messenger webhook payloads.
//!
//! Whilst Hermes currently only supports this platform, the structure is
//! intentionally a little generalised.
//!
//! See [payload::Response].

pub mod error;
pub mod event;
pub mod extract;
pub mod payload;

pub use payload::{from_value, parse};
