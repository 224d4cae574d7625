use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snip_core::repository::{BackendHealth, Result, UrlRecord, UrlRepository};
use snip_core::{StorageError, UrlId};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::trace;

const BACKEND: &str = "in-memory";

/// In-memory implementation of [`UrlRepository`] using two DashMaps.
///
/// The URL index is the source of truth for uniqueness: an insert holds the
/// shard lock of its URL entry while assigning the identifier, so concurrent
/// inserts of the same URL yield exactly one record. Identifiers start at 1.
#[derive(Debug)]
pub struct InMemoryRepository {
    ids: DashMap<String, UrlId>,
    urls: DashMap<UrlId, String>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: DashMap::with_capacity(capacity),
            urls: DashMap::with_capacity(capacity),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Snapshot of all stored records ordered by identifier.
    pub fn records(&self) -> Vec<UrlRecord> {
        let mut records: Vec<UrlRecord> = self
            .urls
            .iter()
            .map(|entry| UrlRecord {
                id: *entry.key(),
                full_url: entry.value().clone(),
            })
            .collect();
        records.sort_by_key(|record| record.id);
        records
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryRepository {
    async fn find_id_by_url(&self, full_url: &str) -> Result<Option<UrlId>> {
        Ok(self.ids.get(full_url).map(|entry| *entry.value()))
    }

    async fn find_url_by_id(&self, id: UrlId) -> Result<Option<String>> {
        Ok(self.urls.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, full_url: &str) -> Result<()> {
        match self.ids.entry(full_url.to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(full_url.to_owned())),
            Entry::Vacant(slot) => {
                let id = UrlId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
                // Publish the reverse mapping before the URL becomes findable.
                self.urls.insert(id, full_url.to_owned());
                slot.insert(id);
                trace!(%id, "stored url in memory");
                Ok(())
            }
        }
    }

    async fn health(&self) -> BackendHealth {
        BackendHealth::ok(BACKEND)
    }
}
