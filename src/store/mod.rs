//! SQLite-backed stores: the schema-flexible document side and the
//! relational `mittaukset` side.

pub mod documents;
pub mod measurements;

use std::path::Path;

pub use documents::DocumentStore;
pub use measurements::MeasurementStore;

fn database_url(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}
