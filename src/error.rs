use thiserror::Error;

#[derive(Debug, Error)]
pub enum MittariError {
    #[error("missing configuration: {0}")]
    MissingConfiguration(&'static str),

    /// An empty result set is treated as a misconfigured source, not a no-op.
    #[error("nothing to migrate ({skipped} document(s) skipped)")]
    NothingToMigrate { skipped: usize },

    #[error("document has no string id")]
    DocumentWithoutId,

    #[error("malformed document body: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
