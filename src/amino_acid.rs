//! Amino acid names used by `transl_except` and `codon` attributes.

use crate::error::Error;

/// Stop marker in translations.
pub const STOP: char = '*';

/// Residue used for codons that cannot be resolved to a single amino acid.
pub const UNKNOWN: char = 'X';

/// Start residue.
pub const METHIONINE: char = 'M';

/// Three-letter names (and keywords) with their single-letter codes.
static NAMES: [(&str, char); 25] = [
    ("Ala", 'A'),
    ("Arg", 'R'),
    ("Asn", 'N'),
    ("Asp", 'D'),
    ("Cys", 'C'),
    ("Gln", 'Q'),
    ("Glu", 'E'),
    ("Gly", 'G'),
    ("His", 'H'),
    ("Ile", 'I'),
    ("Leu", 'L'),
    ("Lys", 'K'),
    ("Met", 'M'),
    ("Phe", 'F'),
    ("Pro", 'P'),
    ("Ser", 'S'),
    ("Thr", 'T'),
    ("Trp", 'W'),
    ("Tyr", 'Y'),
    ("Val", 'V'),
    ("Sec", 'U'),
    ("Pyl", 'O'),
    ("TERM", '*'),
    ("Ter", '*'),
    ("OTHER", 'X'),
];

/// Maps an amino acid name to its single-letter code, ignoring case.
///
/// Accepts the 20 standard three-letter codes, `Sec`, `Pyl`, `TERM`/`Ter` (stop) and
/// `OTHER` (unknown residue).
pub fn one_letter_code(name: &str) -> Result<char, Error> {
    let name = name.trim();
    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
        .ok_or_else(|| Error::UnknownAminoAcid(name.to_string()))
}

/// Name accepted by [`one_letter_code`] for a single-letter code.
#[must_use]
pub fn three_letter_name(code: char) -> Option<&'static str> {
    NAMES.iter().find(|&&(_, c)| c == code).map(|&(n, _)| n)
}
