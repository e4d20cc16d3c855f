//! Passage repository.

use exn::ResultExt;
use lectern_reference::Passage;
use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{Database, Fingerprint};

#[derive(sqlx::FromRow)]
struct PassageRow {
    passage: String,
}
impl TryFrom<PassageRow> for Passage {
    type Error = crate::error::Error;
    fn try_from(row: PassageRow) -> Result<Self> {
        serde_json::from_str(&row.passage).or_raise(|| ErrorKind::InvalidData("passage"))
    }
}

/// Reads and writes cached passages.
///
/// Entries are stored as JSON alongside their storage and expiry timestamps
/// (unix seconds). A row whose expiry has passed is never returned.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}
impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }
}
impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch a fresh passage, or `None` if absent or expired.
    #[instrument(level = "debug", skip(self, fingerprint), fields(fingerprint = %fingerprint))]
    pub async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<Passage>> {
        let row: Option<PassageRow> = sqlx::query_as(include_str!("../queries/get_passage.sql"))
            .bind(fingerprint.as_str())
            .bind(OffsetDateTime::now_utc().unix_timestamp())
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(Passage::try_from).transpose()
    }

    /// Store a passage for `ttl`, replacing any previous entry.
    #[instrument(level = "debug", skip(self, fingerprint, passage), fields(fingerprint = %fingerprint))]
    pub async fn put(&self, fingerprint: &Fingerprint, passage: &Passage, ttl: Duration) -> Result<()> {
        let stored_at = OffsetDateTime::now_utc().unix_timestamp();
        let expires_at = stored_at.saturating_add(ttl.whole_seconds());
        let json = serde_json::to_string(passage).or_raise(|| ErrorKind::InvalidData("passage"))?;
        sqlx::query(include_str!("../queries/upsert_passage.sql"))
            .bind(fingerprint.as_str())
            .bind(json)
            .bind(stored_at)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }

    /// Number of entries that haven't expired.
    pub async fn count(&self) -> Result<u64> {
        let row: (i64,) = sqlx::query_as(include_str!("../queries/count_passages.sql"))
            .bind(OffsetDateTime::now_utc().unix_timestamp())
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        u64::try_from(row.0).or_raise(|| ErrorKind::InvalidData("count"))
    }

    /// Remove every entry. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn flush(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM passages")
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected())
    }

    /// Remove expired entries. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn purge_expired(&self) -> Result<u64> {
        let result = sqlx::query(include_str!("../queries/purge_expired.sql"))
            .bind(OffsetDateTime::now_utc().unix_timestamp())
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_reference::Source;
    use time::macros::datetime;

    fn passage(text: &str) -> Passage {
        Passage {
            reference: "John 3:16".to_string(),
            book: "John".to_string(),
            chapter: 3,
            end_chapter: None,
            start_verse: Some(16),
            end_verse: Some(16),
            version: "KJV".to_string(),
            text: text.to_string(),
            fetched_at: datetime!(2024-05-06 07:08:09 UTC),
            source: Source::Provider("bolls".to_string()),
        }
    }

    async fn repository() -> Repository {
        let db = Database::connect_in_memory().await.unwrap();
        Repository::from(&db)
    }

    fn fingerprint() -> Fingerprint {
        Fingerprint::new("KJV", "John", 3, 16, 16)
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = repository().await;
        assert_eq!(repo.get(&fingerprint()).await.unwrap(), None);
        repo.put(&fingerprint(), &passage("16 For God so loved"), Duration::hours(1)).await.unwrap();
        assert_eq!(repo.get(&fingerprint()).await.unwrap(), Some(passage("16 For God so loved")));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let repo = repository().await;
        repo.put(&fingerprint(), &passage("old"), Duration::hours(1)).await.unwrap();
        repo.put(&fingerprint(), &passage("new"), Duration::hours(1)).await.unwrap();
        assert_eq!(repo.get(&fingerprint()).await.unwrap().unwrap().text, "new");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_expired_entries_are_misses() {
        let repo = repository().await;
        repo.put(&fingerprint(), &passage("stale"), Duration::ZERO).await.unwrap();
        assert_eq!(repo.get(&fingerprint()).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.purge_expired().await.unwrap(), 1);
        assert_eq!(repo.purge_expired().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_purge_keeps_fresh_entries() {
        let repo = repository().await;
        let other = Fingerprint::new("KJV", "John", 3, 17, 17);
        repo.put(&fingerprint(), &passage("fresh"), Duration::days(30)).await.unwrap();
        repo.put(&other, &passage("stale"), Duration::seconds(-5)).await.unwrap();
        assert_eq!(repo.purge_expired().await.unwrap(), 1);
        assert!(repo.get(&fingerprint()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_flush() {
        let repo = repository().await;
        repo.put(&fingerprint(), &passage("one"), Duration::hours(1)).await.unwrap();
        repo.put(&Fingerprint::new("KJV", "John", 3, 17, 17), &passage("two"), Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(repo.flush().await.unwrap(), 2);
        assert_eq!(repo.get(&fingerprint()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_row_is_invalid_data() {
        let db = Database::connect_in_memory().await.unwrap();
        sqlx::query("INSERT INTO passages VALUES (?1, 'not json', 0, ?2)")
            .bind(fingerprint().as_str())
            .bind(i64::MAX)
            .execute(db.pool())
            .await
            .unwrap();
        let err = Repository::from(&db).get(&fingerprint()).await.unwrap_err();
        assert!(matches!(*err, ErrorKind::InvalidData("passage")));
    }
}
