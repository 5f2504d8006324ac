use std::path::PathBuf;

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use crate::{generate, store::DocumentStore};

use super::require_db;

/// Generates the synthetic dataset and loads it into the document store.
pub async fn seed(documents_db: Option<PathBuf>, seed: Option<u64>) -> Result<usize> {
    let db_path = require_db(
        documents_db,
        "pass --documents-db or set MITTARI_DOCUMENTS_DB",
    )?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let documents = generate::documents(&mut rng);

    let store = DocumentStore::open(&db_path).await?;
    let written = store.upsert(&documents).await?;

    Ok(written)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;
    use crate::error::MittariError;

    #[tokio::test]
    async fn should_seed_the_document_store() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("docs.sqlite");

        let written = seed(Some(db_path.clone()), Some(42)).await.unwrap();
        assert_eq!(written, 500);

        let store = DocumentStore::open(&db_path).await.unwrap();
        let documents = store.fetch_all().await.unwrap();
        assert_eq!(documents.len(), 500);
        assert_eq!(documents[0]["id"], "doc-0001");
    }

    #[tokio::test]
    async fn should_not_grow_the_store_on_reseed() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("docs.sqlite");

        seed(Some(db_path.clone()), Some(1)).await.unwrap();
        seed(Some(db_path.clone()), Some(2)).await.unwrap();

        let store = DocumentStore::open(&db_path).await.unwrap();
        assert_eq!(store.fetch_all().await.unwrap().len(), 500);
    }

    #[tokio::test]
    async fn should_fail_without_configuration() {
        let err = seed(None, None).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MittariError>(),
            Some(MittariError::MissingConfiguration(_))
        ));
    }
}
