use thiserror::Error;

/// Result type for shortener operations.
pub type Result<T> = std::result::Result<T, ShortenerError>;

/// Errors raised by a [`UrlRepository`][crate::UrlRepository] backend.
///
/// Absence of a record is not an error here; repositories return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend rejected the insert because the full URL is already stored.
    #[error("full url already stored: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors raised by an [`IdCodec`][crate::IdCodec].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("identifier must be non-negative, got {0}")]
    NegativeId(i64),
    #[error("identifier cannot be encoded: {0}")]
    Encode(String),
    #[error("invalid short code: {0}")]
    InvalidCode(String),
}

/// Errors surfaced by the [`Shortener`][crate::Shortener] to transport layers.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// The requested URL or identifier is not stored.
    #[error("url not found: {0}")]
    NotFound(String),
    /// The supplied short code cannot be decoded.
    #[error("invalid short code: {0}")]
    InvalidCode(String),
    /// The codec is misconfigured or refused the identifier.
    #[error("encoding failed: {0}")]
    Encoding(String),
    #[error("storage error: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
    /// A save succeeded but the stored URL is not visible on re-read.
    #[error("consistency violation: {0}")]
    Consistency(String),
}

impl ShortenerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShortenerError::NotFound(_))
    }
}

impl From<CodecError> for ShortenerError {
    fn from(value: CodecError) -> Self {
        match value {
            CodecError::InvalidCode(message) => Self::InvalidCode(message),
            other => Self::Encoding(other.to_string()),
        }
    }
}
