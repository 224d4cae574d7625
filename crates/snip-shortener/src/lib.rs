//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which combines a
//! [`UrlRepository`][snip_core::UrlRepository] with an
//! [`IdCodec`][snip_core::IdCodec], the error classification shared by
//! transport layers, and the gRPC front end in [`grpc`]. Core types are
//! re-exported from `snip_core`.

pub mod error;
pub mod grpc;
pub mod service;

pub use error::{Severity, ShortenerError};
pub use grpc::ShortenerGrpcServer;
pub use service::ShortenerService;
pub use snip_core::Shortener;
