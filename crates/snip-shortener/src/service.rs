use async_trait::async_trait;
use snip_core::{
    BackendHealth, IdCodec, ShortCode, Shortener, ShortenerError, StorageError, UrlId,
    UrlRepository,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

type Result<T> = std::result::Result<T, ShortenerError>;

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`UrlRepository`] and an [`IdCodec`]:
/// - the repository assigns identifiers and stores URLs
/// - the codec turns identifiers into short codes and back
///
/// The service holds no mutable state and takes no locks. Whether a URL can
/// end up with two records under concurrent `create_or_get` calls depends on
/// the repository enforcing uniqueness; a [`StorageError::Conflict`] from the
/// insert is treated as "already stored".
pub struct ShortenerService<R, C> {
    repository: Arc<R>,
    codec: Arc<C>,
}

impl<R, C> Clone for ShortenerService<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<R: UrlRepository, C: IdCodec> ShortenerService<R, C> {
    /// Creates a new `ShortenerService`.
    pub fn new(repository: R, codec: C) -> Self {
        Self::from_shared(Arc::new(repository), Arc::new(codec))
    }

    /// Creates a service over a repository and codec that are shared elsewhere.
    pub fn from_shared(repository: Arc<R>, codec: Arc<C>) -> Self {
        Self { repository, codec }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn encode(&self, id: UrlId) -> Result<ShortCode> {
        Ok(self.codec.encode(id)?)
    }
}

#[async_trait]
impl<R: UrlRepository, C: IdCodec> Shortener for ShortenerService<R, C> {
    async fn get_short_code(&self, full_url: &str) -> Result<ShortCode> {
        let Some(id) = self.repository.find_id_by_url(full_url).await? else {
            debug!(url = %full_url, "url not stored");
            return Err(ShortenerError::NotFound(full_url.to_owned()));
        };

        self.encode(id)
    }

    async fn save_url(&self, full_url: &str) -> Result<()> {
        self.repository.insert(full_url).await?;
        Ok(())
    }

    async fn get_full_url(&self, code: &str) -> Result<String> {
        let id = self.codec.decode(code)?;

        match self.repository.find_url_by_id(id).await? {
            Some(full_url) => Ok(full_url),
            None => {
                debug!(%code, %id, "no url stored under identifier");
                Err(ShortenerError::NotFound(format!("short code {code}")))
            }
        }
    }

    async fn create_or_get(&self, full_url: &str) -> Result<ShortCode> {
        match self.get_short_code(full_url).await {
            Ok(code) => return Ok(code),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err),
        }

        match self.save_url(full_url).await {
            Ok(()) => info!(url = %full_url, "stored new url"),
            Err(ShortenerError::Storage(StorageError::Conflict(_))) => {
                warn!(url = %full_url, "url was stored concurrently, reading existing record");
            }
            Err(err) => return Err(err),
        }

        match self.get_short_code(full_url).await {
            Err(err) if err.is_not_found() => {
                error!(url = %full_url, "url not visible right after it was saved");
                Err(ShortenerError::Consistency(format!(
                    "url {full_url} was saved but cannot be read back"
                )))
            }
            result => result,
        }
    }

    async fn health(&self) -> BackendHealth {
        self.repository.health().await
    }
}
