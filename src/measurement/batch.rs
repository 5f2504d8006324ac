//! Applies extraction across a whole fetched batch of documents.

use serde_json::Value;

use super::{extract, Extraction, Measurement, Skip};
use crate::error::MittariError;

/// Outcome of partitioning a batch: the rows to write and the documents left
/// out. Both sequences preserve the fetch order.
#[derive(Debug, Default)]
pub struct Migration {
    pub rows: Vec<Measurement>,
    pub skipped: Vec<Skip>,
}

impl Migration {
    /// Zero surviving rows aborts the run before the sink is touched; an
    /// empty write is a misconfiguration signal, not a no-op.
    pub fn ensure_rows(&self) -> Result<(), MittariError> {
        if self.rows.is_empty() {
            return Err(MittariError::NothingToMigrate {
                skipped: self.skipped.len(),
            });
        }

        Ok(())
    }
}

/// Runs every document through extraction exactly once, in fetch order.
/// Duplicate ids pass through untouched; the sink's upsert resolves them.
pub fn partition(documents: &[Value]) -> Migration {
    let mut migration = Migration::default();

    for document in documents {
        match extract(document) {
            Extraction::Row(row) => migration.rows.push(row),
            Extraction::Skip(skip) => migration.skipped.push(skip),
        }
    }

    migration
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::measurement::{SkipReason, UNKNOWN_ID};

    fn good(id: &str, location: &str) -> Value {
        json!({"id": id, "paikkakunta": location, "pvm": "2024-01-01", "lampotila": 1.0})
    }

    #[test]
    fn should_split_batch_into_rows_and_skips() {
        let documents = vec![
            good("doc-1", "Turku"),
            json!({"id": "doc-2", "paikkakunta": "Oulu"}),
            good("doc-3", "Vaasa"),
            json!({"paikkakunta": "Lahti", "pvm": "2024-01-01", "lampotila": 1.0}),
        ];

        let migration = partition(&documents);

        assert_eq!(migration.rows.len(), 2);
        assert_eq!(migration.rows[0].id, "doc-1");
        assert_eq!(migration.rows[1].id, "doc-3");

        assert_eq!(migration.skipped.len(), 2);
        assert_eq!(migration.skipped[0].id, "doc-2");
        assert_eq!(migration.skipped[0].reason, SkipReason::MissingField("pvm"));
        assert_eq!(migration.skipped[1].id, UNKNOWN_ID);

        migration.ensure_rows().unwrap();
    }

    #[test]
    fn should_pass_duplicate_ids_through_in_order() {
        let documents = vec![good("doc-1", "Turku"), good("doc-1", "Oulu")];

        let migration = partition(&documents);

        assert_eq!(migration.rows.len(), 2);
        assert_eq!(migration.rows[0].location, "Turku");
        assert_eq!(migration.rows[1].location, "Oulu");
    }

    #[test]
    fn should_fail_when_every_document_is_skipped() {
        let documents = vec![
            json!({"id": "doc-1"}),
            json!({"id": "doc-2", "content": {"pvm": "2024-01-01"}}),
        ];

        let migration = partition(&documents);
        let err = migration.ensure_rows().unwrap_err();

        assert!(matches!(
            err,
            MittariError::NothingToMigrate { skipped: 2 }
        ));
    }

    #[test]
    fn should_fail_on_empty_batch() {
        let migration = partition(&[]);

        assert!(migration.ensure_rows().is_err());
    }
}
