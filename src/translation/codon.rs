//! A single resolved codon.

use std::fmt;

/// One translated codon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codon {
    /// Upper-case bases; three except for a terminal codon completed by `transl_except`.
    pub bases: String,
    /// 1-based offset of the first base in the translated sequence.
    pub position: usize,
    pub amino_acid: char,
    /// Whether a `transl_except` or `codon` override decided the residue.
    pub is_exception: bool,
}

impl Codon {
    #[must_use]
    pub fn new(bases: String, position: usize, amino_acid: char, is_exception: bool) -> Self {
        Self {
            bases,
            position,
            amino_acid,
            is_exception,
        }
    }

    /// 1-based position of the last base.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.bases.len().saturating_sub(1)
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}={}", self.bases, self.position, self.amino_acid)
    }
}
