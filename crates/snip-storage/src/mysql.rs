use async_trait::async_trait;
use snip_core::repository::{BackendHealth, Result, UrlRepository};
use snip_core::{StorageError, UrlId};
use sqlx::{MySqlPool, Row};
use tracing::trace;

const BACKEND: &str = "mysql";
const SCHEMA: &str = include_str!("../ddl/mysql/urls.sql");

/// MySQL implementation of the repository contract.
///
/// Identifiers come from the `AUTO_INCREMENT` key. Uniqueness of the full
/// URL is enforced by a unique index over its SHA-256 digest, so a duplicate
/// insert surfaces as [`StorageError::Conflict`].
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `urls` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl UrlRepository for MySqlRepository {
    async fn find_id_by_url(&self, full_url: &str) -> Result<Option<UrlId>> {
        let row = sqlx::query(
            r#"
            SELECT id
            FROM urls
            WHERE full_url_hash = SHA2(?, 256)
              AND full_url = ?
            LIMIT 1
            "#,
        )
        .bind(full_url)
        .bind(full_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
        Ok(Some(UrlId::new(id)))
    }

    async fn find_url_by_id(&self, id: UrlId) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT full_url
            FROM urls
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|row| row.try_get("full_url").map_err(map_sqlx_error))
            .transpose()
    }

    async fn insert(&self, full_url: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (full_url)
            VALUES (?)
            "#,
        )
        .bind(full_url)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => {
                trace!(id = done.last_insert_id(), "stored url in mysql");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(full_url.to_owned()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn health(&self) -> BackendHealth {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => BackendHealth::ok(BACKEND),
            Err(err) => BackendHealth::unavailable(BACKEND, map_sqlx_error(err).to_string()),
        }
    }
}
