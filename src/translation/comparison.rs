//! Comparison of a declared translation against a computed one.

use crate::amino_acid::UNKNOWN;

/// Outcome of [`equals_translation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationComparison {
    /// True only if both translations are identical.
    pub matches: bool,
    /// Positions where `expected` has `X` and `actual` has a different residue.
    pub x_mismatch_count: usize,
}

/// Compares two translations position by position.
///
/// An `X` in `expected` opposite a different residue is counted separately in
/// `x_mismatch_count` but still makes the comparison fail, as does any other
/// difference or a length mismatch.
#[must_use]
pub fn equals_translation(expected: &str, actual: &str) -> TranslationComparison {
    let mut matches = expected.len() == actual.len();
    let mut x_mismatch_count = 0;

    for (e, a) in expected.chars().zip(actual.chars()) {
        if e == a {
            continue;
        }
        matches = false;
        if e == UNKNOWN {
            x_mismatch_count += 1;
        }
    }

    TranslationComparison {
        matches,
        x_mismatch_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        let c = equals_translation("MKV", "MKV");
        assert!(c.matches);
        assert_eq!(c.x_mismatch_count, 0);
    }

    #[test]
    fn x_in_expected() {
        let c = equals_translation("MX", "MK");
        assert!(!c.matches);
        assert_eq!(c.x_mismatch_count, 1);
    }

    #[test]
    fn x_against_x() {
        let c = equals_translation("MXK", "MXK");
        assert!(c.matches);
        assert_eq!(c.x_mismatch_count, 0);
    }

    #[test]
    fn ordinary_mismatch() {
        let c = equals_translation("MKV", "MRV");
        assert!(!c.matches);
        assert_eq!(c.x_mismatch_count, 0);
        // X in actual is an ordinary mismatch
        let c = equals_translation("MK", "MX");
        assert!(!c.matches);
        assert_eq!(c.x_mismatch_count, 0);
    }

    #[test]
    fn length_mismatch() {
        let c = equals_translation("MK", "MKV");
        assert!(!c.matches);
        assert_eq!(c.x_mismatch_count, 0);
        assert!(!equals_translation("", "M").matches);
        assert!(equals_translation("", "").matches);
    }
}
