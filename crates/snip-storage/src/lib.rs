//! Storage backends for the snip URL shortener.
//!
//! Both backends enforce one identifier per full URL and report a duplicate
//! insert as [`StorageError::Conflict`].

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use snip_core::repository::{BackendHealth, Result, UrlRecord, UrlRepository};
pub use snip_core::StorageError;
