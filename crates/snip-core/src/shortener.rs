use crate::error::Result;
use crate::repository::BackendHealth;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// The URL shortening operations exposed to transport handlers.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Returns the short code of an already stored URL.
    async fn get_short_code(&self, full_url: &str) -> Result<ShortCode>;

    /// Stores the URL without checking for an existing record.
    async fn save_url(&self, full_url: &str) -> Result<()>;

    /// Resolves a short code back to the stored URL.
    async fn get_full_url(&self, code: &str) -> Result<String>;

    /// Returns the existing short code for the URL, storing it first if needed.
    async fn create_or_get(&self, full_url: &str) -> Result<ShortCode>;

    /// Health of the underlying storage backend.
    async fn health(&self) -> BackendHealth;
}
