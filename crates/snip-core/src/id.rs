use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier assigned by a repository to a stored URL.
///
/// Backed by `i64` to match the relational `BIGINT` key domain. Only
/// non-negative values are ever produced by a repository; a negative value
/// is rejected by the codec when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlId(i64);

impl UrlId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns `true` if the identifier lies in the encodable range.
    pub const fn is_non_negative(self) -> bool {
        self.0 >= 0
    }
}

impl From<i64> for UrlId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UrlId> for i64 {
    fn from(value: UrlId) -> Self {
        value.0
    }
}

impl Display for UrlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
