//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the domain vocabulary shared by the codec, the
//! storage backends, the shortener service and the transport layer.

pub mod codec;
pub mod error;
pub mod id;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use codec::IdCodec;
pub use error::{CodecError, ShortenerError, StorageError};
pub use id::UrlId;
pub use repository::{BackendHealth, UrlRecord, UrlRepository};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
