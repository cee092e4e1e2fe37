//! Translation of a coding sequence into its conceptual protein.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::amino_acid::{METHIONINE, STOP, UNKNOWN};
use crate::error::Error;
use crate::exception::{CodonException, PositionException};
use crate::feature::FeatureAttributes;
use crate::genetic_code::DEFAULT_TABLE_ID;

use super::codon::Codon;
use super::codon_translator::CodonTranslator;
use super::diagnostic::Diagnostic;
use super::fixes::FixOptions;
use super::result::TranslationResult;

/// Stands in for a non-ASCII input byte so codon bases stay one byte each.
const NON_ASCII_BASE: char = '?';

/// Translates the coding sequence of one feature.
///
/// Configuration is fixed before calling [`Translator::translate`]; translating never
/// mutates the translator, so partiality forced by a fix is reported on the result.
#[derive(Debug, Clone)]
pub struct Translator {
    codon_translator: CodonTranslator,
    codon_start: i32,
    five_prime_partial: bool,
    three_prime_partial: bool,
    non_translating: bool,
    peptide_feature: bool,
    exception: bool,
    position_exceptions: Vec<PositionException>,
    fixes: FixOptions,
}

impl Translator {
    /// A translator for a complete CDS under the given NCBI table.
    pub fn new(table_id: u32) -> Result<Self, Error> {
        Ok(Self {
            codon_translator: CodonTranslator::new(table_id)?,
            codon_start: 1,
            five_prime_partial: false,
            three_prime_partial: false,
            non_translating: false,
            peptide_feature: false,
            exception: false,
            position_exceptions: Vec::new(),
            fixes: FixOptions::default(),
        })
    }

    /// Configure a translator from feature attributes.
    ///
    /// Reads `transl_table`, `codon_start`, pseudo and partial markers, `exception`,
    /// and every `transl_except` and `codon` value.
    pub fn from_feature<F: FeatureAttributes + ?Sized>(feature: &F) -> Result<Self, Error> {
        let table_id = parse_attribute(feature.attribute("transl_table"), "transl_table")?
            .unwrap_or(DEFAULT_TABLE_ID);
        let mut translator = Self::new(table_id)?;

        if let Some(codon_start) = parse_attribute(feature.attribute("codon_start"), "codon_start")? {
            translator.codon_start = codon_start;
        }
        translator.five_prime_partial = feature.is_five_prime_partial();
        translator.three_prime_partial = feature.is_three_prime_partial();
        translator.non_translating = feature.is_pseudo();
        translator.peptide_feature = feature.is_peptide();
        translator.exception = feature.has_exception();

        for value in feature.attribute_list("transl_except") {
            translator.add_position_exception(value.parse()?);
        }
        for value in feature.attribute_list("codon") {
            translator.add_codon_exception(value.parse()?);
        }
        Ok(translator)
    }

    #[must_use]
    pub fn codon_translator(&self) -> &CodonTranslator {
        &self.codon_translator
    }

    #[must_use]
    pub fn codon_start(&self) -> i32 {
        self.codon_start
    }

    /// Values outside 1..=3 are accepted here and reported by `translate`.
    pub fn set_codon_start(&mut self, codon_start: i32) {
        self.codon_start = codon_start;
    }

    #[must_use]
    pub fn five_prime_partial(&self) -> bool {
        self.five_prime_partial
    }

    pub fn set_five_prime_partial(&mut self, partial: bool) {
        self.five_prime_partial = partial;
    }

    #[must_use]
    pub fn three_prime_partial(&self) -> bool {
        self.three_prime_partial
    }

    pub fn set_three_prime_partial(&mut self, partial: bool) {
        self.three_prime_partial = partial;
    }

    #[must_use]
    pub fn non_translating(&self) -> bool {
        self.non_translating
    }

    /// Pseudo features skip the start and stop codon checks.
    pub fn set_non_translating(&mut self, non_translating: bool) {
        self.non_translating = non_translating;
    }

    #[must_use]
    pub fn peptide_feature(&self) -> bool {
        self.peptide_feature
    }

    pub fn set_peptide_feature(&mut self, peptide: bool) {
        self.peptide_feature = peptide;
    }

    #[must_use]
    pub fn exception(&self) -> bool {
        self.exception
    }

    pub fn set_exception(&mut self, exception: bool) {
        self.exception = exception;
    }

    #[must_use]
    pub fn position_exceptions(&self) -> &[PositionException] {
        &self.position_exceptions
    }

    pub fn add_position_exception(&mut self, exception: PositionException) {
        self.position_exceptions.push(exception);
    }

    pub fn add_codon_exception(&mut self, exception: CodonException) {
        self.codon_translator.add_codon_exception(exception);
    }

    #[must_use]
    pub fn fixes(&self) -> &FixOptions {
        &self.fixes
    }

    pub fn fixes_mut(&mut self) -> &mut FixOptions {
        &mut self.fixes
    }

    pub fn set_fixes(&mut self, fixes: FixOptions) {
        self.fixes = fixes;
    }

    pub fn enable_all_fixes(&mut self) {
        self.fixes = FixOptions::all();
    }

    /// Translate a nucleotide sequence.
    ///
    /// Problems are collected as diagnostics on the result; fixes enabled in
    /// [`FixOptions`] suppress their own diagnostic and set the matching `fixed_*` flag.
    #[must_use]
    pub fn translate(&self, sequence: &[u8]) -> TranslationResult {
        let mut result = TranslationResult::new(self.five_prime_partial, self.three_prime_partial);

        if sequence.is_empty() {
            result.errors.push(Diagnostic::EmptySequence);
            return result;
        }
        let offset = match self.codon_start {
            1 => 0,
            2 => 1,
            3 => 2,
            other => {
                result.errors.push(Diagnostic::InvalidCodonStart(other));
                return result;
            }
        };
        if offset > 0 && !result.five_prime_partial {
            if self.fixes.fix_codon_start_not_one_make_5_partial {
                debug!(codon_start = self.codon_start, "codon_start is not 1, marking 5' partial");
                result.five_prime_partial = true;
                result.fixed_five_prime_partial = true;
            } else {
                result
                    .errors
                    .push(Diagnostic::CodonStartNotOne(self.codon_start));
            }
        }

        let coding = sequence.get(offset..).unwrap_or_default();
        if coding.is_empty() {
            result.errors.push(Diagnostic::EmptySequence);
            return result;
        }

        let mut windows = coding.chunks_exact(3);
        for (index, window) in windows.by_ref().enumerate() {
            let position = offset + index * 3 + 1;
            let codon = self.translate_window(window, position, index == 0, &mut result);
            result.codons.push(codon);
        }
        let remainder = windows.remainder();
        let remainder_position = offset + coding.len() - remainder.len() + 1;
        self.handle_trailing_bases(remainder, remainder_position, &mut result);

        check_unknown_residues(&mut result);
        self.check_start_codon(&mut result);
        self.check_stop_codon(&mut result);
        self.check_internal_stop_codons(&mut result);
        result
    }

    fn translate_window(
        &self,
        window: &[u8],
        position: usize,
        first: bool,
        result: &mut TranslationResult,
    ) -> Codon {
        let bases = codon_bases(window);
        if let Some(exception) = self.position_exception(position, position + window.len() - 1) {
            return Codon::new(bases, position, exception.amino_acid, true);
        }

        let start_context = first && !result.five_prime_partial;
        let resolved = if start_context {
            self.codon_translator.translate_start_codon(window)
        } else {
            self.codon_translator.translate_other_codon(window)
        };
        let mut amino_acid = resolved.unwrap_or_else(|_| {
            result.errors.push(Diagnostic::InvalidBase {
                codon: bases.clone(),
                position,
            });
            UNKNOWN
        });

        if start_context
            && self.fixes.fix_degenerate_start_codon
            && self.codon_translator.is_degenerate_start_codon(window)
        {
            debug!(codon = %bases, "degenerate start codon read as M");
            amino_acid = METHIONINE;
            result.fixed_degenerate_start_codon = true;
        }

        let is_exception = self.codon_translator.codon_exception(window).is_some();
        Codon::new(bases, position, amino_acid, is_exception)
    }

    fn handle_trailing_bases(&self, remainder: &[u8], position: usize, result: &mut TranslationResult) {
        if remainder.is_empty() {
            return;
        }
        let bases = codon_bases(remainder);

        // transl_except completing a truncated terminal codon
        if let Some(exception) = self.position_exception(position, position + remainder.len() - 1) {
            result
                .codons
                .push(Codon::new(bases, position, exception.amino_acid, true));
            return;
        }

        if result.three_prime_partial {
            let after_stop = result.codons.last().is_some_and(|c| c.amino_acid == STOP);
            if after_stop && self.fixes.fix_delete_trailing_bases_after_stop_codon {
                warn!(bases = %bases, "deleted trailing bases after stop codon");
                result.fixed_trailing_bases = true;
            } else {
                result.trailing_bases = bases;
            }
            return;
        }

        if self.fixes.fix_non_multiple_of_three_make_3_and_5_partial {
            debug!(bases = %bases, "length not a multiple of three, marking both ends partial");
            if !result.five_prime_partial {
                result.five_prime_partial = true;
                result.fixed_five_prime_partial = true;
            }
            result.three_prime_partial = true;
            result.fixed_three_prime_partial = true;
        } else {
            result.errors.push(Diagnostic::NotMultipleOfThree {
                trailing_bases: bases.clone(),
            });
        }
        result.trailing_bases = bases;
    }

    fn check_start_codon(&self, result: &mut TranslationResult) {
        if result.five_prime_partial || self.non_translating {
            return;
        }
        let first = result.codons.first();
        if first.is_some_and(|c| c.amino_acid == METHIONINE) {
            return;
        }
        if self.fixes.fix_no_start_codon_make_5_partial {
            debug!("no start codon, marking 5' partial");
            result.five_prime_partial = true;
            result.fixed_five_prime_partial = true;
        } else {
            let codon = first.map(|c| c.bases.clone()).unwrap_or_default();
            result.errors.push(Diagnostic::MissingStartCodon { codon });
        }
    }

    fn check_stop_codon(&self, result: &mut TranslationResult) {
        let last = result.codons.last();
        let ends_with_stop = last.is_some_and(|c| c.amino_acid == STOP);

        if result.three_prime_partial {
            if ends_with_stop
                && result.trailing_bases.is_empty()
                && self.fixes.fix_valid_stop_codon_remove_3_partial
            {
                debug!("valid stop codon, removing 3' partial");
                result.three_prime_partial = false;
                result.fixed_three_prime_partial = true;
            }
            return;
        }
        if ends_with_stop || self.peptide_feature || self.non_translating {
            return;
        }

        if self.fixes.fix_no_stop_codon_make_3_partial {
            debug!("no stop codon, marking 3' partial");
            result.three_prime_partial = true;
            result.fixed_three_prime_partial = true;
        } else {
            let degenerate =
                last.is_some_and(|c| self.codon_translator.is_degenerate_stop_codon(c.bases.as_bytes()));
            result.errors.push(Diagnostic::MissingStopCodon { degenerate });
        }
    }

    fn check_internal_stop_codons(&self, result: &mut TranslationResult) {
        let internal = result.codons.len().saturating_sub(1);
        let positions: Vec<usize> = result.codons[..internal]
            .iter()
            .filter(|c| c.amino_acid == STOP)
            .map(|c| c.position)
            .collect();
        if positions.is_empty() || self.exception {
            return;
        }

        if self.fixes.fix_internal_stop_codon_make_pseudo {
            debug!(count = positions.len(), "internal stop codons, marking pseudo");
            result.fixed_pseudo = true;
        } else {
            result.errors.extend(
                positions
                    .into_iter()
                    .map(|position| Diagnostic::InternalStopCodon { position }),
            );
        }
    }

    fn position_exception(&self, start: usize, end: usize) -> Option<&PositionException> {
        self.position_exceptions.iter().find(|e| e.matches(start, end))
    }
}

/// More than half of the codons translating to `X` is an error.
fn check_unknown_residues(result: &mut TranslationResult) {
    let total = result.codons.len();
    let unknown = result.codons.iter().filter(|c| c.amino_acid == UNKNOWN).count();
    if unknown * 2 > total {
        result
            .errors
            .push(Diagnostic::TooManyUnknownResidues { unknown, total });
    }
}

/// Upper-case bases with `U` written as `T`; one char per input byte.
fn codon_bases(window: &[u8]) -> String {
    window
        .iter()
        .map(|&b| match b.to_ascii_uppercase() {
            b'U' => 'T',
            other if other.is_ascii() => char::from(other),
            _ => NON_ASCII_BASE,
        })
        .collect()
}

fn parse_attribute<T: FromStr>(value: Option<&str>, name: &str) -> Result<Option<T>, Error> {
    value
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|_| Error::Parse(format!("invalid {name} value: '{v}'")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;

    fn translator(table_id: u32) -> Translator {
        Translator::new(table_id).unwrap()
    }

    fn partial_translator() -> Translator {
        let mut t = translator(1);
        t.set_five_prime_partial(true);
        t.set_three_prime_partial(true);
        t
    }

    #[test]
    fn complete_cds() {
        let result = translator(11).translate(b"ATGAAATAG");
        assert_eq!(result.translation(), "MK*");
        assert_eq!(result.conceptual_translation(), "MK");
        assert_eq!(result.conceptual_translation_codons(), 2);
        assert!(result.is_valid());
        assert!(!result.is_fixed());
        assert_eq!(result.codons()[1].position, 4);
    }

    #[test]
    fn lower_case_and_rna() {
        let result = translator(1).translate(b"augaaauag");
        assert_eq!(result.translation(), "MK*");
        assert_eq!(result.sequence(), "ATGAAATAG");
    }

    #[test]
    fn codon_start_offsets() {
        let sequence = b"GCATGAAATAG";
        for codon_start in 1..=3 {
            let mut t = partial_translator();
            t.set_codon_start(codon_start);
            let result = t.translate(sequence);
            let offset = usize::try_from(codon_start - 1).unwrap();
            assert_eq!(result.codons()[0].position, offset + 1);
            assert_eq!(
                result.codons()[0].bases.as_bytes(),
                &sequence[offset..offset + 3]
            );
        }
        let mut t = translator(1);
        t.set_five_prime_partial(true);
        t.set_codon_start(3);
        let result = t.translate(sequence);
        assert_eq!(result.translation(), "MK*");
        assert!(result.is_valid());
    }

    #[test]
    fn codon_start_not_one_on_complete_cds() {
        let mut t = translator(1);
        t.set_codon_start(2);
        let result = t.translate(b"GATGAAATAG");
        assert_eq!(result.translation(), "MK*");
        assert_eq!(result.errors(), [Diagnostic::CodonStartNotOne(2)]);
        assert!(!result.five_prime_partial);
        assert!(!result.fixed_five_prime_partial);
    }

    #[test]
    fn codon_start_fix_leaves_out_of_range_values() {
        let mut t = translator(1);
        t.set_codon_start(4);
        t.fixes_mut().fix_codon_start_not_one_make_5_partial = true;
        let result = t.translate(b"GATGAAATAG");
        assert_eq!(result.errors(), [Diagnostic::InvalidCodonStart(4)]);
        assert!(!result.fixed_five_prime_partial);
        assert!(result.codons().is_empty());
    }

    #[test]
    fn invalid_codon_start() {
        let mut t = translator(1);
        t.set_codon_start(4);
        let result = t.translate(b"ATGTAA");
        assert_eq!(result.errors(), [Diagnostic::InvalidCodonStart(4)]);
        assert!(result.codons().is_empty());
        t.set_codon_start(0);
        assert_eq!(t.translate(b"ATGTAA").errors(), [Diagnostic::InvalidCodonStart(0)]);
    }

    #[test]
    fn empty_sequence() {
        let result = translator(1).translate(b"");
        assert_eq!(result.errors(), [Diagnostic::EmptySequence]);

        let mut t = translator(1);
        t.set_five_prime_partial(true);
        t.set_codon_start(3);
        assert_eq!(t.translate(b"AT").errors(), [Diagnostic::EmptySequence]);
    }

    #[test]
    fn codon_start_fix_marks_five_prime_partial() {
        let mut t = translator(1);
        t.set_codon_start(2);
        t.fixes_mut().fix_codon_start_not_one_make_5_partial = true;
        let result = t.translate(b"GAAATAG");
        assert!(result.five_prime_partial);
        assert!(result.fixed_five_prime_partial);
        assert_eq!(result.translation(), "K*");
        assert!(result.is_valid());
        // Configuration is untouched
        assert!(!t.five_prime_partial());
    }

    #[test]
    fn sole_unknown_codon() {
        let result = partial_translator().translate(b"NNN");
        assert_eq!(result.translation(), "X");
        assert!(result.has_errors());
        assert_eq!(
            result.errors(),
            [Diagnostic::TooManyUnknownResidues { unknown: 1, total: 1 }]
        );
    }

    #[test]
    fn half_unknown_is_tolerated() {
        let result = partial_translator().translate(b"NNNAAA");
        assert_eq!(result.translation(), "XK");
        assert!(result.is_valid());
    }

    #[test]
    fn ambiguous_consensus() {
        let result = partial_translator().translate(b"TTYRAR");
        assert_eq!(result.translation(), "FX");
    }

    #[test]
    fn invalid_base() {
        let result = partial_translator().translate(b"AAAZZZAAA");
        assert_eq!(result.translation(), "KXK");
        assert_eq!(
            result.errors(),
            [Diagnostic::InvalidBase {
                codon: "ZZZ".to_string(),
                position: 4
            }]
        );
    }

    #[test]
    fn non_ascii_byte_keeps_base_count() {
        let input = [b'A', b'A', 0xE9, b'A'];
        let result = partial_translator().translate(&input);
        assert_eq!(result.codons()[0].bases, "AA?");
        assert_eq!(result.codons()[0].end(), 3);
        assert_eq!(result.translation_base_count(), input.len());
        assert_eq!(result.sequence().len(), input.len());
        assert!(matches!(result.errors()[0], Diagnostic::InvalidBase { position: 1, .. }));
    }

    #[test]
    fn mitochondrial_table() {
        let result = translator(2).translate(b"ATGTGATAA");
        assert_eq!(result.translation(), "MW*");
        assert!(result.is_valid());
    }

    #[test]
    fn codon_exception_applies_everywhere() {
        let mut t = translator(1);
        t.add_codon_exception(CodonException::new("TGA", 'W').unwrap());
        let result = t.translate(b"ATGTGAAAATGATAA");
        assert_eq!(result.translation(), "MWKW*");
        assert!(result.is_valid());
        assert!(result.codons()[1].is_exception);
        assert!(!result.codons()[2].is_exception);
        assert!(result.codons()[3].is_exception);
    }

    #[test]
    fn position_exception_applies_to_one_codon() {
        let mut t = translator(1);
        t.add_position_exception(PositionException::new(7, 9, 'W'));
        let result = t.translate(b"ATGAAATGATGATAA");
        assert_eq!(result.translation(), "MKW**");
        assert!(result.codons()[2].is_exception);
        assert!(!result.codons()[3].is_exception);
        assert_eq!(
            result.errors(),
            [Diagnostic::InternalStopCodon { position: 10 }]
        );
    }

    #[test]
    fn position_exception_needs_exact_range() {
        let mut t = translator(1);
        t.add_position_exception(PositionException::new(7, 8, 'W'));
        let result = t.translate(b"ATGAAATGATAA");
        assert_eq!(result.translation(), "MK**");
    }

    #[test]
    fn transl_except_completes_terminal_codon() {
        let mut t = translator(1);
        t.add_position_exception(PositionException::new(7, 8, STOP));
        let result = t.translate(b"ATGAAATA");
        assert_eq!(result.translation(), "MK*");
        assert_eq!(result.conceptual_translation(), "MK");
        assert_eq!(result.trailing_bases(), "");
        assert_eq!(result.codons()[2].bases, "TA");
        assert!(result.is_valid());
        assert_eq!(result.translation_base_count(), 8);
    }

    #[test]
    fn degenerate_start_fix() {
        let mut t = translator(1);
        let result = t.translate(b"RTGAAATAA");
        assert_eq!(result.translation(), "XK*");
        assert!(!result.fixed_degenerate_start_codon);
        assert!(matches!(result.errors()[0], Diagnostic::MissingStartCodon { .. }));

        t.fixes_mut().fix_degenerate_start_codon = true;
        let result = t.translate(b"RTGAAATAA");
        assert_eq!(result.translation(), "MK*");
        assert!(result.fixed_degenerate_start_codon);
        assert!(result.is_valid());
    }

    #[test]
    fn degenerate_start_fix_skips_partial_start() {
        let mut t = translator(1);
        t.set_five_prime_partial(true);
        t.fixes_mut().fix_degenerate_start_codon = true;
        let result = t.translate(b"RTGAAATAA");
        assert_eq!(result.translation(), "XK*");
        assert!(!result.fixed_degenerate_start_codon);
    }

    #[test]
    fn alternative_start_codon() {
        let result = translator(11).translate(b"GTGAAATAA");
        assert_eq!(result.translation(), "MK*");
        let mut t = translator(11);
        t.set_five_prime_partial(true);
        assert_eq!(t.translate(b"GTGAAATAA").translation(), "VK*");
    }

    #[test]
    fn missing_start_codon() {
        let t = translator(1);
        let result = t.translate(b"AAATAA");
        assert_eq!(
            result.errors(),
            [Diagnostic::MissingStartCodon {
                codon: "AAA".to_string()
            }]
        );

        let mut t = translator(1);
        t.fixes_mut().fix_no_start_codon_make_5_partial = true;
        let result = t.translate(b"AAATAA");
        assert!(result.is_valid());
        assert!(result.five_prime_partial);
        assert!(result.fixed_five_prime_partial);
    }

    #[test]
    fn missing_stop_codon() {
        let result = translator(1).translate(b"ATGAAA");
        assert_eq!(
            result.errors(),
            [Diagnostic::MissingStopCodon { degenerate: false }]
        );

        let result = translator(1).translate(b"ATGYAA");
        assert_eq!(
            result.errors(),
            [Diagnostic::MissingStopCodon { degenerate: true }]
        );

        let mut t = translator(1);
        t.fixes_mut().fix_no_stop_codon_make_3_partial = true;
        let result = t.translate(b"ATGAAA");
        assert!(result.is_valid());
        assert!(result.three_prime_partial);
        assert!(result.fixed_three_prime_partial);
    }

    #[test]
    fn peptide_needs_no_stop() {
        let mut t = translator(1);
        t.set_peptide_feature(true);
        assert!(t.translate(b"ATGAAA").is_valid());
        // The start check still applies
        assert!(t.translate(b"AAAAAA").has_errors());
    }

    #[test]
    fn valid_stop_removes_three_prime_partial() {
        let mut t = translator(1);
        t.set_three_prime_partial(true);
        let result = t.translate(b"ATGAAATAA");
        assert!(result.three_prime_partial);
        assert!(!result.fixed_three_prime_partial);

        t.fixes_mut().fix_valid_stop_codon_remove_3_partial = true;
        let result = t.translate(b"ATGAAATAA");
        assert!(!result.three_prime_partial);
        assert!(result.fixed_three_prime_partial);
        assert!(result.is_valid());
    }

    #[test]
    fn not_multiple_of_three() {
        let result = translator(1).translate(b"ATGAAATAAGC");
        assert_eq!(result.trailing_bases(), "GC");
        assert_eq!(
            result.errors(),
            [Diagnostic::NotMultipleOfThree {
                trailing_bases: "GC".to_string()
            }]
        );

        let mut t = translator(1);
        t.fixes_mut().fix_non_multiple_of_three_make_3_and_5_partial = true;
        let result = t.translate(b"ATGAAATAAGC");
        assert!(result.is_valid());
        assert!(result.five_prime_partial && result.three_prime_partial);
        assert!(result.fixed_five_prime_partial && result.fixed_three_prime_partial);
        assert_eq!(result.trailing_bases(), "GC");
    }

    #[test]
    fn three_prime_partial_keeps_trailing_bases() {
        let mut t = translator(1);
        t.set_three_prime_partial(true);
        let result = t.translate(b"ATGAAAGC");
        assert!(result.is_valid());
        assert_eq!(result.trailing_bases(), "GC");
        assert_eq!(result.sequence(), "ATGAAAGC");
        assert_eq!(result.translation_base_count(), 8);
    }

    #[test]
    fn delete_trailing_bases_after_stop() {
        let mut t = translator(1);
        t.set_three_prime_partial(true);
        let result = t.translate(b"ATGTAAG");
        assert_eq!(result.trailing_bases(), "G");

        t.fixes_mut().fix_delete_trailing_bases_after_stop_codon = true;
        let result = t.translate(b"ATGTAAG");
        assert_eq!(result.trailing_bases(), "");
        assert!(result.fixed_trailing_bases);
        assert_eq!(result.sequence(), "ATGTAA");
    }

    #[test]
    fn internal_stop_codons() {
        let result = translator(1).translate(b"ATGTAAAAATGATAG");
        assert_eq!(
            result.errors(),
            [
                Diagnostic::InternalStopCodon { position: 4 },
                Diagnostic::InternalStopCodon { position: 10 },
            ]
        );

        let mut t = translator(1);
        t.set_exception(true);
        assert!(t.translate(b"ATGTAAAAATAG").is_valid());

        // Pseudo features skip the start and stop checks, not this one
        let mut t = translator(1);
        t.set_non_translating(true);
        assert_eq!(
            t.translate(b"AAATAAAAA").errors(),
            [Diagnostic::InternalStopCodon { position: 4 }]
        );

        let mut t = translator(1);
        t.fixes_mut().fix_internal_stop_codon_make_pseudo = true;
        let result = t.translate(b"ATGTAAAAATAG");
        assert!(result.is_valid());
        assert!(result.fixed_pseudo);
    }

    #[test]
    fn all_fixes() {
        let mut t = translator(1);
        t.enable_all_fixes();
        assert_eq!(*t.fixes(), FixOptions::all());
        let result = t.translate(b"AAATGAAAAGC");
        assert!(result.is_valid());
        assert!(result.fixed_five_prime_partial);
        assert!(result.fixed_pseudo);
    }

    #[test]
    fn repeated_translation_is_identical() {
        let a = translator(1).translate(b"ATGGCCAAATTTGGGTAA");
        let b = translator(1).translate(b"ATGGCCAAATTTGGGTAA");
        assert_eq!(a, b);
        assert_eq!(a.translation(), b.translation());
    }

    #[test]
    fn from_feature_attributes() {
        let feature = Feature::new("CDS")
            .with_attribute("transl_table", "11")
            .with_attribute("codon_start", "2")
            .with_attribute("start_range", ".,1")
            .with_attribute("transl_except", "(pos:5..7,aa:Sec)")
            .with_attribute("codon", "(seq:\"TGA\",aa:Trp)");
        let t = Translator::from_feature(&feature).unwrap();
        assert_eq!(t.codon_translator().table().id(), 11);
        assert_eq!(t.codon_start(), 2);
        assert!(t.five_prime_partial());
        assert!(!t.three_prime_partial());
        assert_eq!(t.position_exceptions().len(), 1);

        let result = t.translate(b"GAAATGAAAATGATAA");
        assert_eq!(result.translation(), "KUKW*");
    }

    #[test]
    fn from_feature_defaults() {
        let t = Translator::from_feature(&Feature::new("CDS")).unwrap();
        assert_eq!(t.codon_translator().table().id(), DEFAULT_TABLE_ID);
        assert_eq!(t.codon_start(), 1);
        assert!(!t.non_translating());
        assert!(!t.exception());

        let pseudo = Feature::new("mat_peptide")
            .with_flag("pseudo")
            .with_attribute("exception", "ribosomal slippage");
        let t = Translator::from_feature(&pseudo).unwrap();
        assert!(t.non_translating());
        assert!(t.peptide_feature());
        assert!(t.exception());
    }

    #[test]
    fn from_feature_errors() {
        let bad_table = Feature::new("CDS").with_attribute("transl_table", "7");
        assert!(matches!(
            Translator::from_feature(&bad_table),
            Err(Error::UnknownTable(7))
        ));
        let bad_start = Feature::new("CDS").with_attribute("codon_start", "one");
        assert!(matches!(
            Translator::from_feature(&bad_start),
            Err(Error::Parse(_))
        ));
        let bad_except = Feature::new("CDS").with_attribute("transl_except", "pos:1..3,aa:Trp");
        assert!(Translator::from_feature(&bad_except).is_err());
    }
}
