//! A single NCBI genetic code table.

use std::fmt;

use crate::amino_acid;

/// Bases in NCBI table order.
const BASES: [u8; 4] = *b"TCAG";

/// Maps an unambiguous base to its NCBI order index: T/U=0, C=1, A=2, G=3.
fn base_to_index(b: u8) -> Option<usize> {
    match b {
        b'T' | b't' | b'U' | b'u' => Some(0),
        b'C' | b'c' => Some(1),
        b'A' | b'a' => Some(2),
        b'G' | b'g' => Some(3),
        _ => None,
    }
}

/// Index of an unambiguous codon: first*16 + second*4 + third.
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    Some(base_to_index(codon[0])? * 16 + base_to_index(codon[1])? * 4 + base_to_index(codon[2])?)
}

fn index_to_codon(index: usize) -> [u8; 3] {
    [BASES[index / 16], BASES[(index / 4) % 4], BASES[index % 4]]
}

/// Immutable codon-to-amino-acid mapping for one NCBI genetic code.
///
/// Holds two complete maps over the 64 unambiguous triplets: the "other" map used for
/// every codon after the first, and the "start" map used for the initiating codon, in
/// which each start codon of the table reads as `M`.
pub struct GeneticCodeTable {
    id: u32,
    name: &'static str,
    other: [char; 64],
    start: [char; 64],
    is_start: [bool; 64],
}

impl GeneticCodeTable {
    /// Builds a table from NCBI-ordered residues and a list of start codons.
    pub(crate) fn new(
        id: u32,
        name: &'static str,
        amino_acids: &[u8; 64],
        start_codons: &[&str],
    ) -> Self {
        let other: [char; 64] = std::array::from_fn(|i| amino_acids[i] as char);
        let mut is_start = [false; 64];
        for codon in start_codons {
            if let Some(index) = codon_index(codon.as_bytes()) {
                is_start[index] = true;
            }
        }
        let start: [char; 64] = std::array::from_fn(|i| {
            if is_start[i] {
                amino_acid::METHIONINE
            } else {
                other[i]
            }
        });
        Self {
            id,
            name,
            other,
            start,
            is_start,
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Residue for an unambiguous codon at any position but the first.
    ///
    /// Returns `None` if the codon is not three of A/C/G/T/U (either case).
    #[must_use]
    pub fn other_codon(&self, codon: &[u8]) -> Option<char> {
        codon_index(codon).map(|i| self.other[i])
    }

    /// Residue for an unambiguous codon in the initiating position.
    #[must_use]
    pub fn start_codon(&self, codon: &[u8]) -> Option<char> {
        codon_index(codon).map(|i| self.start[i])
    }

    /// Whether the codon may initiate translation under this table.
    #[must_use]
    pub fn is_start_codon(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|i| self.is_start[i])
    }

    /// Whether the codon terminates translation under this table.
    #[must_use]
    pub fn is_stop_codon(&self, codon: &[u8]) -> bool {
        self.other_codon(codon) == Some(amino_acid::STOP)
    }

    /// All 64 triplets with their residue, in NCBI order.
    pub fn other_codon_map(&self) -> impl Iterator<Item = ([u8; 3], char)> + '_ {
        self.other
            .iter()
            .enumerate()
            .map(|(i, &aa)| (index_to_codon(i), aa))
    }

    /// All 64 triplets with their residue in the initiating position, in NCBI order.
    pub fn start_codon_map(&self) -> impl Iterator<Item = ([u8; 3], char)> + '_ {
        self.start
            .iter()
            .enumerate()
            .map(|(i, &aa)| (index_to_codon(i), aa))
    }

    #[must_use]
    pub fn start_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.is_start[i])
            .map(index_to_codon)
            .collect()
    }

    #[must_use]
    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.other[i] == amino_acid::STOP)
            .map(index_to_codon)
            .collect()
    }
}

impl fmt::Debug for GeneticCodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneticCodeTable")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for GeneticCodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}
