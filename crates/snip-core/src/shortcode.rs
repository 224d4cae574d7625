use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Minimum number of characters in a generated short code.
pub const MIN_LENGTH: u8 = 10;

/// An externally visible, reversible encoding of a [`UrlId`][crate::UrlId].
///
/// Values are only produced by an [`IdCodec`][crate::IdCodec]; incoming
/// strings from clients stay plain `&str` until the codec has decoded them.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps an already encoded code without validation.
    ///
    /// Use this only for output of a trusted codec.
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().to_owned())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
