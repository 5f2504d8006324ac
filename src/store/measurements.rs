//! Relational sink for normalized measurements.

use std::path::Path;

use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};

use super::database_url;
use crate::{cli::create_progress_bar, error::MittariError, measurement::Measurement};

pub struct MeasurementStore {
    pool: SqlitePool,
}

impl MeasurementStore {
    /// Opens the sink and makes sure the table and index exist. Creation is
    /// idempotent, so a re-run hits the same schema.
    pub async fn open(path: &Path) -> Result<Self, MittariError> {
        let url = database_url(path);

        if !Sqlite::database_exists(&url).await.unwrap_or(false) {
            Sqlite::create_database(&url).await?;
        }

        let pool = SqlitePool::connect(&url).await?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await?;

        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS mittaukset (
                id          TEXT NOT NULL PRIMARY KEY,
                paikkakunta TEXT NOT NULL,
                pvm         TEXT NOT NULL,
                lampotila   REAL NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS ix_mittaukset_paikkakunta_pvm
             ON mittaukset (paikkakunta, pvm)",
        )
        .execute(&pool)
        .await?;

        Ok(MeasurementStore { pool })
    }

    /// Upserts rows keyed by id inside one transaction. The last row wins
    /// when a batch repeats an id, and a re-run updates instead of
    /// duplicating.
    pub async fn upsert(&self, rows: &[Measurement]) -> Result<usize, MittariError> {
        let bar = create_progress_bar(rows.len() as u64, "Writing measurements".to_string());

        let mut transaction = self.pool.begin().await?;

        for row in rows {
            sqlx::query(
                "INSERT INTO mittaukset (id, paikkakunta, pvm, lampotila)
                 VALUES (?, ?, ?, ?)
                 ON CONFLICT(id) DO UPDATE SET
                     paikkakunta = excluded.paikkakunta,
                     pvm = excluded.pvm,
                     lampotila = excluded.lampotila",
            )
            .bind(&row.id)
            .bind(&row.location)
            .bind(&row.date)
            .bind(row.temperature)
            .execute(&mut *transaction)
            .await?;

            bar.inc(1);
        }

        transaction.commit().await?;
        bar.finish_with_message("Measurements written");

        Ok(rows.len())
    }

    /// Reads every row back, ordered by id.
    pub async fn fetch_all(&self) -> Result<Vec<Measurement>, MittariError> {
        let rows: Vec<(String, String, String, f64)> =
            sqlx::query_as("SELECT id, paikkakunta, pvm, lampotila FROM mittaukset ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, location, date, temperature)| Measurement {
                id,
                location,
                date,
                temperature,
            })
            .collect())
    }
}

// -- Tests -------------------------------------------------------------------
