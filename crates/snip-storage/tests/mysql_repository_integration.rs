use std::time::Duration;

use snip_core::UrlId;
use snip_storage::{MySqlRepository, StorageError, UrlRepository};
use snip_test_infra::mysql::{MySqlConfig, MySqlServer};

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::start(MySqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let repo = connect_with_retry(&url).await;
        repo.ensure_schema().await.expect("create schema");

        Self {
            _mysql: mysql,
            repo,
        }
    }

    async fn row_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.repo.pool())
            .await
            .expect("count rows")
    }
}

async fn connect_with_retry(url: &str) -> MySqlRepository {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlRepository::connect(url).await {
            Ok(repo) => return repo,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

#[tokio::test]
async fn insert_then_lookup_both_ways() {
    let fixture = Fixture::start().await;

    fixture.repo.insert("https://example.com/a?b=1").await.unwrap();

    let id = fixture
        .repo
        .find_id_by_url("https://example.com/a?b=1")
        .await
        .unwrap()
        .expect("id for stored url");
    let url = fixture.repo.find_url_by_id(id).await.unwrap();
    assert_eq!(url.as_deref(), Some("https://example.com/a?b=1"));
}

#[tokio::test]
async fn ids_are_assigned_in_insertion_order() {
    let fixture = Fixture::start().await;

    fixture.repo.insert("https://one.example").await.unwrap();
    fixture.repo.insert("https://two.example").await.unwrap();

    let one = fixture.repo.find_id_by_url("https://one.example").await.unwrap();
    let two = fixture.repo.find_id_by_url("https://two.example").await.unwrap();
    assert_eq!(one, Some(UrlId::new(1)));
    assert_eq!(two, Some(UrlId::new(2)));
}

#[tokio::test]
async fn duplicate_insert_conflicts() {
    let fixture = Fixture::start().await;

    fixture.repo.insert("https://example.com").await.unwrap();
    let err = fixture.repo.insert("https://example.com").await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict(ref url) if url == "https://example.com"));
    assert_eq!(fixture.row_count().await, 1);
}

#[tokio::test]
async fn unknown_entries_are_none() {
    let fixture = Fixture::start().await;

    assert_eq!(fixture.repo.find_url_by_id(UrlId::new(42)).await.unwrap(), None);
    assert_eq!(
        fixture.repo.find_id_by_url("https://missing.example").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn urls_are_matched_exactly() {
    let fixture = Fixture::start().await;

    fixture.repo.insert("https://example.com/Path").await.unwrap();

    let other_case = fixture
        .repo
        .find_id_by_url("https://example.com/path")
        .await
        .unwrap();
    assert_eq!(other_case, None);
    fixture.repo.insert("https://example.com/path").await.unwrap();
    assert_eq!(fixture.row_count().await, 2);
}

#[tokio::test]
async fn ensure_schema_is_repeatable() {
    let fixture = Fixture::start().await;

    fixture.repo.insert("https://example.com").await.unwrap();
    fixture.repo.ensure_schema().await.unwrap();

    assert_eq!(fixture.row_count().await, 1);
}

#[tokio::test]
async fn health_reports_ok() {
    let fixture = Fixture::start().await;

    let health = fixture.repo.health().await;
    assert!(health.healthy);
    assert_eq!(health.backend, "mysql");
}
