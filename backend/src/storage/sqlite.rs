//! SQLite document tables.
//!
//! Each collection is a table of `(id, body)` rows where `body` is the
//! document's JSON. Used for local runs without MongoDB and as the test store.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};

use super::traits::{Document, DocumentCollection, Result};

/// DbConnection manages the SQLite pool shared by all collections
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

pub struct SqliteCollection<T: Document> {
    db: DbConnection,
    table: String,
    _document: PhantomData<fn() -> T>,
}

impl<T: Document> SqliteCollection<T> {
    /// Open the collection, creating its table if needed.
    ///
    /// `table` is interpolated into SQL and must be a fixed identifier.
    pub async fn new(db: DbConnection, table: &str) -> Result<Self> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                body TEXT NOT NULL
            );
            "#
        ))
        .execute(db.pool())
        .await?;

        Ok(Self {
            db,
            table: table.to_string(),
            _document: PhantomData,
        })
    }
}

#[async_trait]
impl<T: Document> DocumentCollection<T> for SqliteCollection<T> {
    fn name(&self) -> &str {
        &self.table
    }

    async fn list(&self, limit: u32) -> Result<Vec<T>> {
        let rows = sqlx::query(&format!(
            "SELECT body FROM {} ORDER BY rowid LIMIT ?",
            self.table
        ))
        .bind(i64::from(limit))
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| -> Result<T> {
                let body: String = row.get("body");
                Ok(serde_json::from_str(&body)?)
            })
            .collect()
    }

    async fn upsert(&self, document: &T) -> Result<()> {
        let body = serde_json::to_string(document)?;

        // ON CONFLICT keeps the original rowid, so listing order stays stable
        sqlx::query(&format!(
            r#"
            INSERT INTO {} (id, body) VALUES (?, ?)
            ON CONFLICT(id) DO UPDATE SET body = excluded.body
            "#,
            self.table
        ))
        .bind(document.id())
        .bind(body)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", self.table))
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
