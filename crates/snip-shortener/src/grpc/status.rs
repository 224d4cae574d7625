//! Mapping of shortener errors onto gRPC statuses.

use snip_core::{ShortenerError, StorageError};
use tonic::{Code, Status};

/// Returns the gRPC code reported for an error.
pub fn status_code(error: &ShortenerError) -> Code {
    match error {
        ShortenerError::NotFound(_) => Code::NotFound,
        ShortenerError::InvalidCode(_) => Code::InvalidArgument,
        ShortenerError::Storage(StorageError::Conflict(_)) => Code::AlreadyExists,
        ShortenerError::Storage(StorageError::Unavailable(_)) => Code::Unavailable,
        ShortenerError::Storage(StorageError::Timeout(_)) => Code::DeadlineExceeded,
        ShortenerError::Encoding(_)
        | ShortenerError::Storage(_)
        | ShortenerError::Consistency(_) => Code::Internal,
    }
}

/// Converts an error into a [`Status`].
///
/// Client-facing errors keep their message; server faults are reported with
/// a generic message so backend details do not leak.
pub fn into_status(error: ShortenerError) -> Status {
    let code = status_code(&error);
    match code {
        Code::NotFound | Code::InvalidArgument | Code::AlreadyExists => {
            Status::new(code, error.to_string())
        }
        Code::Unavailable => Status::new(code, "storage backend unavailable"),
        Code::DeadlineExceeded => Status::new(code, "storage operation timed out"),
        _ => Status::new(code, "internal error"),
    }
}
