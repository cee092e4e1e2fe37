//! NCBI genetic code tables and their process-wide registry.

mod ncbi;
pub mod registry;
pub mod table;

pub use registry::GeneticCodeTableRegistry;
pub use table::GeneticCodeTable;

use crate::error::Error;

/// NCBI table used when a feature does not name one.
pub const DEFAULT_TABLE_ID: u32 = 1;

/// Look up a table in the shared registry.
pub fn table(id: u32) -> Result<&'static GeneticCodeTable, Error> {
    GeneticCodeTableRegistry::global().get(id)
}
