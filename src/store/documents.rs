//! Document store access. Documents are kept as raw JSON bodies keyed by
//! id, so producers are free to shape the payload as they like.

use std::path::Path;

use serde_json::Value;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};

use super::database_url;
use crate::{cli::create_progress_bar, error::MittariError};

pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    /// Opens the store, creating the database file and table on first use.
    pub async fn open(path: &Path) -> Result<Self, MittariError> {
        let url = database_url(path);

        if !Sqlite::database_exists(&url).await.unwrap_or(false) {
            Sqlite::create_database(&url).await?;
        }

        let pool = SqlitePool::connect(&url).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                id   TEXT NOT NULL PRIMARY KEY,
                body TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(DocumentStore { pool })
    }

    /// Upserts documents keyed by their `id` field. Re-seeding the same ids
    /// replaces the stored bodies instead of duplicating them.
    pub async fn upsert(&self, documents: &[Value]) -> Result<usize, MittariError> {
        let bar = create_progress_bar(documents.len() as u64, "Loading documents".to_string());

        let mut transaction = self.pool.begin().await?;

        for document in documents {
            let id = document
                .get("id")
                .and_then(Value::as_str)
                .ok_or(MittariError::DocumentWithoutId)?;
            let body = serde_json::to_string(document)?;

            sqlx::query(
                "INSERT INTO documents (id, body) VALUES (?, ?)
                 ON CONFLICT(id) DO UPDATE SET body = excluded.body",
            )
            .bind(id)
            .bind(body)
            .execute(&mut *transaction)
            .await?;

            bar.inc(1);
        }

        transaction.commit().await?;
        bar.finish_with_message("Documents loaded");

        Ok(documents.len())
    }

    /// Reads every stored document back, ordered by id.
    pub async fn fetch_all(&self) -> Result<Vec<Value>, MittariError> {
        let bodies: Vec<(String,)> = sqlx::query_as("SELECT body FROM documents ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        bodies
            .iter()
            .map(|(body,)| serde_json::from_str(body).map_err(MittariError::from))
            .collect()
    }
}

// -- Tests -------------------------------------------------------------------
