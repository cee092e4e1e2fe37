//! Problems found while translating a sequence.

use thiserror::Error;

/// A translation-time problem.
///
/// Diagnostics are collected on the [`crate::translation::TranslationResult`] rather
/// than returned as errors, so a caller can evaluate many features and report every
/// problem at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("invalid codon_start {0}: expected 1, 2 or 3")]
    InvalidCodonStart(i32),

    #[error("codon_start {0} on a feature that is not 5' partial")]
    CodonStartNotOne(i32),

    #[error("codon '{codon}' at position {position} contains a non-IUPAC base")]
    InvalidBase { codon: String, position: usize },

    #[error("sequence length is not a multiple of three: trailing bases '{trailing_bases}'")]
    NotMultipleOfThree { trailing_bases: String },

    #[error("too many unknown residues: {unknown} of {total} codons translate to X")]
    TooManyUnknownResidues { unknown: usize, total: usize },

    #[error("translation does not begin with a start codon: '{codon}'")]
    MissingStartCodon { codon: String },

    #[error("translation does not end with a stop codon{}", degenerate_note(.degenerate))]
    MissingStopCodon { degenerate: bool },

    #[error("internal stop codon at position {position}")]
    InternalStopCodon { position: usize },
}

fn degenerate_note(degenerate: &bool) -> &'static str {
    if *degenerate {
        " (the final codon could encode a stop)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Diagnostic::InvalidCodonStart(4).to_string(),
            "invalid codon_start 4: expected 1, 2 or 3"
        );
        assert_eq!(
            Diagnostic::CodonStartNotOne(2).to_string(),
            "codon_start 2 on a feature that is not 5' partial"
        );
        assert_eq!(
            Diagnostic::MissingStopCodon { degenerate: false }.to_string(),
            "translation does not end with a stop codon"
        );
        assert!(
            Diagnostic::MissingStopCodon { degenerate: true }
                .to_string()
                .contains("could encode a stop")
        );
        assert_eq!(
            Diagnostic::InternalStopCodon { position: 7 }.to_string(),
            "internal stop codon at position 7"
        );
    }
}
