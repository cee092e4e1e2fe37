//! Codon resolution against one genetic code table.

use std::collections::HashMap;

use tracing::debug;

use crate::amino_acid::{METHIONINE, STOP, UNKNOWN};
use crate::error::Error;
use crate::exception::CodonException;
use crate::genetic_code::{self, GeneticCodeTable};
use crate::iupac;

/// Which of the table's two maps a lookup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Start,
    Other,
}

/// Translates single codons under one genetic code table.
///
/// Ambiguous codons are expanded into every concrete triplet and resolve to the
/// common residue when all expansions agree, or `X` otherwise. Registered codon
/// exceptions are consulted before the table for each concrete triplet.
#[derive(Debug, Clone)]
pub struct CodonTranslator {
    table: &'static GeneticCodeTable,
    exceptions: HashMap<[u8; 3], char>,
}

impl CodonTranslator {
    /// Bind a translator to an NCBI table id.
    pub fn new(table_id: u32) -> Result<Self, Error> {
        let table = genetic_code::table(table_id)?;
        debug!(table = table.id(), name = table.name(), "selected genetic code");
        Ok(Self {
            table,
            exceptions: HashMap::new(),
        })
    }

    #[must_use]
    pub fn table(&self) -> &'static GeneticCodeTable {
        self.table
    }

    /// Register a global override for every occurrence of a triplet.
    pub fn add_codon_exception(&mut self, exception: CodonException) {
        self.exceptions
            .insert(exception.triplet, exception.amino_acid);
    }

    /// The override registered for an unambiguous codon, if any.
    #[must_use]
    pub fn codon_exception(&self, codon: &[u8]) -> Option<char> {
        let triplet = normalized_triplet(codon)?;
        self.exceptions.get(&triplet).copied()
    }

    /// Residue of the initiating codon.
    pub fn translate_start_codon(&self, codon: &[u8]) -> Result<char, Error> {
        self.resolve(codon, Lookup::Start)
    }

    /// Residue of any codon but the initiating one.
    pub fn translate_other_codon(&self, codon: &[u8]) -> Result<char, Error> {
        self.resolve(codon, Lookup::Other)
    }

    /// True if any character is outside {A, C, G, T}.
    #[must_use]
    pub fn is_ambiguous(codon: &[u8]) -> bool {
        iupac::is_ambiguous(codon)
    }

    /// True if an ambiguous codon could be a start codon under some expansion while
    /// its consensus residue is not `M`.
    #[must_use]
    pub fn is_degenerate_start_codon(&self, codon: &[u8]) -> bool {
        if !Self::is_ambiguous(codon) {
            return false;
        }
        let Some(expansions) = iupac::expand_codon(codon) else {
            return false;
        };
        expansions.iter().any(|t| self.table.is_start_codon(t))
            && self.consensus(&expansions, Lookup::Start) != METHIONINE
    }

    /// True if an ambiguous codon could be a stop codon under some expansion while its
    /// consensus residue is not `*`.
    #[must_use]
    pub fn is_degenerate_stop_codon(&self, codon: &[u8]) -> bool {
        if !Self::is_ambiguous(codon) {
            return false;
        }
        let Some(expansions) = iupac::expand_codon(codon) else {
            return false;
        };
        expansions
            .iter()
            .any(|t| self.lookup(t, Lookup::Other) == STOP)
            && self.consensus(&expansions, Lookup::Other) != STOP
    }

    fn resolve(&self, codon: &[u8], lookup: Lookup) -> Result<char, Error> {
        let expansions = iupac::expand_codon(codon)
            .ok_or_else(|| Error::InvalidCodon(String::from_utf8_lossy(codon).into_owned()))?;
        Ok(self.consensus(&expansions, lookup))
    }

    fn consensus(&self, expansions: &[[u8; 3]], lookup: Lookup) -> char {
        let mut residues = expansions.iter().map(|t| self.lookup(t, lookup));
        let Some(first) = residues.next() else {
            return UNKNOWN;
        };
        if residues.all(|aa| aa == first) {
            first
        } else {
            UNKNOWN
        }
    }

    /// Residue of a concrete upper-case triplet: exception first, then the table.
    fn lookup(&self, triplet: &[u8; 3], lookup: Lookup) -> char {
        if let Some(&aa) = self.exceptions.get(triplet) {
            return aa;
        }
        let residue = match lookup {
            Lookup::Start => self.table.start_codon(triplet),
            Lookup::Other => self.table.other_codon(triplet),
        };
        residue.unwrap_or(UNKNOWN)
    }
}

/// Upper-case, `U`-to-`T` form of an unambiguous three-base codon.
fn normalized_triplet(codon: &[u8]) -> Option<[u8; 3]> {
    if codon.len() != 3 || iupac::is_ambiguous(codon) {
        return None;
    }
    let mut triplet = [0u8; 3];
    for (slot, &b) in triplet.iter_mut().zip(codon) {
        *slot = match b.to_ascii_uppercase() {
            b'U' => b'T',
            other => other,
        };
    }
    Some(triplet)
}
