pub mod batch;
pub mod extract;

pub use batch::{partition, Migration};
pub use extract::{extract, Extraction, Skip, SkipReason, UNKNOWN_ID};

/// One normalized weather measurement, ready for the `mittaukset` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: String,
    pub location: String,
    pub date: String,
    pub temperature: f64,
}
