pub use snip_core::ShortenerError;
use snip_core::StorageError;

/// How a failed request should be reported by a transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Part of normal flow, e.g. an unknown URL. Logged at `debug`.
    Expected,
    /// The caller sent something unusable. Logged at `debug`.
    Client,
    /// A server-side fault. Logged at `error`.
    Server,
}

impl Severity {
    pub fn of(error: &ShortenerError) -> Self {
        match error {
            ShortenerError::NotFound(_) => Severity::Expected,
            ShortenerError::InvalidCode(_) => Severity::Client,
            ShortenerError::Storage(StorageError::Conflict(_)) => Severity::Client,
            ShortenerError::Encoding(_)
            | ShortenerError::Storage(_)
            | ShortenerError::Consistency(_) => Severity::Server,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        let cases = [
            (ShortenerError::NotFound("u".into()), Severity::Expected),
            (ShortenerError::InvalidCode("c".into()), Severity::Client),
            (
                ShortenerError::Storage(StorageError::Conflict("u".into())),
                Severity::Client,
            ),
            (ShortenerError::Encoding("alphabet".into()), Severity::Server),
            (
                ShortenerError::Storage(StorageError::Query("syntax".into())),
                Severity::Server,
            ),
            (ShortenerError::Consistency("lost".into()), Severity::Server),
        ];

        for (error, expected) in cases {
            assert_eq!(Severity::of(&error), expected, "{error}");
        }
    }
}
