//! Opt-in auto-corrections applied during translation.

use serde::Deserialize;

/// Auto-fix policies. Each one turns a specific diagnostic into a recorded fix.
///
/// All policies are off by default. Field names deserialize from camelCase
/// (`fixNoStartCodonMake5Partial`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FixOptions {
    /// Read an ambiguous first codon that could be a start codon as `M`.
    ///
    /// Only applies when the first codon is read as a start codon, so never on a
    /// 5' partial feature.
    pub fix_degenerate_start_codon: bool,
    /// Mark the feature 5' partial instead of reporting a missing start codon.
    pub fix_no_start_codon_make_5_partial: bool,
    /// Mark the feature 5' partial when `codon_start` is 2 or 3.
    pub fix_codon_start_not_one_make_5_partial: bool,
    /// Mark the feature 3' partial instead of reporting a missing stop codon.
    pub fix_no_stop_codon_make_3_partial: bool,
    /// Clear 3' partiality when the sequence ends in a complete stop codon.
    pub fix_valid_stop_codon_remove_3_partial: bool,
    /// Mark both ends partial instead of reporting a length that is not a multiple of three.
    pub fix_non_multiple_of_three_make_3_and_5_partial: bool,
    /// Mark the feature pseudo instead of reporting internal stop codons.
    pub fix_internal_stop_codon_make_pseudo: bool,
    /// Drop bases left over after a final stop codon on a 3' partial feature.
    pub fix_delete_trailing_bases_after_stop_codon: bool,
}

impl FixOptions {
    /// Every policy enabled.
    #[must_use]
    pub fn all() -> Self {
        Self {
            fix_degenerate_start_codon: true,
            fix_no_start_codon_make_5_partial: true,
            fix_codon_start_not_one_make_5_partial: true,
            fix_no_stop_codon_make_3_partial: true,
            fix_valid_stop_codon_remove_3_partial: true,
            fix_non_multiple_of_three_make_3_and_5_partial: true,
            fix_internal_stop_codon_make_pseudo: true,
            fix_delete_trailing_bases_after_stop_codon: true,
        }
    }

    #[must_use]
    pub fn any_enabled(&self) -> bool {
        *self != Self::default()
    }
}
