use crate::error::StorageError;
use crate::id::UrlId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Identifier assigned by the repository on insert.
    pub id: UrlId,
    /// The URL exactly as it was submitted.
    pub full_url: String,
}

/// Health report of a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendHealth {
    /// Short backend name, e.g. `in-memory` or `mysql`.
    pub backend: &'static str,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl BackendHealth {
    pub fn ok(backend: &'static str) -> Self {
        Self {
            backend,
            healthy: true,
            detail: None,
        }
    }

    pub fn unavailable(backend: &'static str, detail: impl Into<String>) -> Self {
        Self {
            backend,
            healthy: false,
            detail: Some(detail.into()),
        }
    }
}

/// Durable store mapping full URLs to identifiers and back.
///
/// Backends are encouraged to enforce uniqueness of the full URL and to
/// report a duplicate insert as [`StorageError::Conflict`]. Dropping a
/// returned future cancels the call.
#[async_trait]
pub trait UrlRepository: Send + Sync + 'static {
    /// Returns the identifier of a stored URL, or `None` if it was never saved.
    async fn find_id_by_url(&self, full_url: &str) -> Result<Option<UrlId>>;

    /// Returns the URL stored under an identifier, or `None` if unassigned.
    async fn find_url_by_id(&self, id: UrlId) -> Result<Option<String>>;

    /// Stores the URL under a freshly assigned identifier.
    async fn insert(&self, full_url: &str) -> Result<()>;

    /// Reports whether the backend is reachable.
    async fn health(&self) -> BackendHealth;
}
