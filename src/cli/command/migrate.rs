use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::create_spinner,
    measurement::{self, Migration},
    store::{DocumentStore, MeasurementStore},
};

use super::require_db;

/// What a finished migration reports back to the caller.
#[derive(Debug)]
pub struct MigrationSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Reads every document out of the document store, extracts measurement
/// rows and upserts them into the `mittaukset` table.
pub async fn migrate(
    documents_db: Option<PathBuf>,
    measurements_db: Option<PathBuf>,
) -> Result<MigrationSummary> {
    let documents_path = require_db(
        documents_db,
        "pass --documents-db or set MITTARI_DOCUMENTS_DB",
    )?;
    let measurements_path = require_db(
        measurements_db,
        "pass --measurements-db or set MITTARI_MEASUREMENTS_DB",
    )?;

    let store = DocumentStore::open(&documents_path).await?;

    let bar = create_spinner("Reading documents...".to_string());
    let documents = store.fetch_all().await?;
    bar.finish_with_message(format!("{} documents read", documents.len()));

    let migration = measurement::partition(&documents);
    report_skips(&migration);
    migration.ensure_rows()?;

    let sink = MeasurementStore::open(&measurements_path).await?;
    let written = sink.upsert(&migration.rows).await?;

    Ok(MigrationSummary {
        written,
        skipped: migration.skipped.len(),
    })
}

fn report_skips(migration: &Migration) {
    for skip in &migration.skipped {
        eprintln!("  skipped {}: {}", skip.id, skip.reason);
    }

    if !migration.skipped.is_empty() {
        eprintln!(
            "warning: {} document(s) skipped because of missing or unreadable fields",
            migration.skipped.len()
        );
    }
}

// -- Tests -------------------------------------------------------------------
