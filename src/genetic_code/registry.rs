//! Process-wide registry of NCBI genetic code tables.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::Error;

use super::ncbi::NCBI_CODES;
use super::table::GeneticCodeTable;

static REGISTRY: LazyLock<GeneticCodeTableRegistry> = LazyLock::new(|| {
    let tables = NCBI_CODES
        .iter()
        .map(|code| {
            (
                code.id,
                GeneticCodeTable::new(code.id, code.name, code.amino_acids, code.starts),
            )
        })
        .collect();
    GeneticCodeTableRegistry { tables }
});

/// All known genetic code tables keyed by NCBI id.
///
/// Built once on first access and read-only afterwards.
#[derive(Debug)]
pub struct GeneticCodeTableRegistry {
    tables: BTreeMap<u32, GeneticCodeTable>,
}

impl GeneticCodeTableRegistry {
    /// The shared registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Look up a table by NCBI id.
    pub fn get(&self, id: u32) -> Result<&GeneticCodeTable, Error> {
        self.tables.get(&id).ok_or(Error::UnknownTable(id))
    }

    #[must_use]
    pub fn all(&self) -> &BTreeMap<u32, GeneticCodeTable> {
        &self.tables
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.tables.contains_key(&id)
    }
}
