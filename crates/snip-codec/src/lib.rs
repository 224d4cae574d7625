//! Short code scheme for the snip URL shortener.
//!
//! [`SqidsCodec`] maps repository identifiers to short codes with a secret,
//! permuted alphabet. Codes are padded to at least
//! [`MIN_LENGTH`][snip_core::shortcode::MIN_LENGTH] characters.

pub mod codec;

pub use codec::{CodecSettings, SqidsCodec};
