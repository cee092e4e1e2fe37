//! Error types for the ribos library.

use thiserror::Error;

/// Errors raised while configuring a translation.
///
/// These indicate malformed input data (an unknown table, a bad `transl_except`, etc.)
/// and are fatal to building a translator. Problems found while translating a
/// sequence are reported as [`crate::translation::Diagnostic`] values instead.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A parse error occurred while reading an attribute value.
    #[error("{0}")]
    Parse(String),

    /// The requested genetic code table is not registered.
    #[error("unknown genetic code table: {0}")]
    UnknownTable(u32),

    /// An amino acid name that has no single-letter code.
    #[error("unrecognized amino acid: '{0}'")]
    UnknownAminoAcid(String),

    /// A codon that is not three IUPAC nucleotides.
    #[error("invalid codon: '{0}'")]
    InvalidCodon(String),
}
