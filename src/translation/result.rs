//! Output of a sequence translation.

use crate::amino_acid::STOP;

use super::codon::Codon;
use super::comparison::{TranslationComparison, equals_translation};
use super::diagnostic::Diagnostic;

/// Codons, leftover bases, diagnostics and applied fixes of one translation.
///
/// `five_prime_partial` and `three_prime_partial` hold the partiality in effect after
/// fixes; the `fixed_*` flags record which fixes changed something.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationResult {
    pub(crate) codons: Vec<Codon>,
    pub(crate) trailing_bases: String,
    pub(crate) errors: Vec<Diagnostic>,
    pub five_prime_partial: bool,
    pub three_prime_partial: bool,
    pub fixed_five_prime_partial: bool,
    pub fixed_three_prime_partial: bool,
    pub fixed_pseudo: bool,
    pub fixed_degenerate_start_codon: bool,
    pub fixed_trailing_bases: bool,
}

impl TranslationResult {
    pub(crate) fn new(five_prime_partial: bool, three_prime_partial: bool) -> Self {
        Self {
            five_prime_partial,
            three_prime_partial,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    /// Zero to two bases after the last complete codon.
    #[must_use]
    pub fn trailing_bases(&self) -> &str {
        &self.trailing_bases
    }

    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any fix was applied.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed_five_prime_partial
            || self.fixed_three_prime_partial
            || self.fixed_pseudo
            || self.fixed_degenerate_start_codon
            || self.fixed_trailing_bases
    }

    /// Every residue, including a final stop marker.
    #[must_use]
    pub fn translation(&self) -> String {
        self.codons.iter().map(|c| c.amino_acid).collect()
    }

    /// Number of codons excluding a final stop codon.
    #[must_use]
    pub fn conceptual_translation_codons(&self) -> usize {
        match self.codons.last() {
            Some(last) if last.amino_acid == STOP => self.codons.len() - 1,
            _ => self.codons.len(),
        }
    }

    /// The translation without a final stop marker.
    #[must_use]
    pub fn conceptual_translation(&self) -> String {
        self.codons[..self.conceptual_translation_codons()]
            .iter()
            .map(|c| c.amino_acid)
            .collect()
    }

    /// Length of the conceptual translation.
    #[must_use]
    pub fn translation_length(&self) -> usize {
        self.conceptual_translation_codons()
    }

    /// Bases covered by codons and trailing bases.
    #[must_use]
    pub fn translation_base_count(&self) -> usize {
        self.codons.iter().map(|c| c.bases.len()).sum::<usize>() + self.trailing_bases.len()
    }

    /// The translated bases: codons followed by trailing bases.
    #[must_use]
    pub fn sequence(&self) -> String {
        let mut sequence = String::with_capacity(self.translation_base_count());
        for codon in &self.codons {
            sequence.push_str(&codon.bases);
        }
        sequence.push_str(&self.trailing_bases);
        sequence
    }

    /// Compare a declared translation (without stop marker) to the conceptual translation.
    #[must_use]
    pub fn compare_with(&self, expected: &str) -> TranslationComparison {
        equals_translation(expected, &self.conceptual_translation())
    }
}
