//! `codon`: residue override for every occurrence of a triplet.

use std::fmt;
use std::str::FromStr;

use crate::amino_acid;
use crate::error::Error;
use crate::iupac;

use super::{pair_value, parse_pairs};

const ATTRIBUTE: &str = "codon";

/// Reads every literal occurrence of `triplet` as `amino_acid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodonException {
    /// Upper-case A/C/G/T triplet.
    pub triplet: [u8; 3],
    pub amino_acid: char,
}

impl CodonException {
    /// Build an exception from a triplet, normalizing case and `U` to `T`.
    pub fn new(triplet: &str, amino_acid: char) -> Result<Self, Error> {
        Ok(Self {
            triplet: normalize_triplet(triplet)?,
            amino_acid,
        })
    }

    /// The triplet as text.
    #[must_use]
    pub fn triplet_str(&self) -> &str {
        // Triplets are validated ASCII on construction.
        std::str::from_utf8(&self.triplet).unwrap_or_default()
    }
}

fn normalize_triplet(value: &str) -> Result<[u8; 3], Error> {
    let bytes = value.as_bytes();
    if bytes.len() != 3 {
        return Err(Error::Parse(format!(
            "{ATTRIBUTE} sequence must be 3 bases, got {}: '{value}'",
            bytes.len()
        )));
    }
    if !bytes.iter().all(|&b| iupac::is_unambiguous_base(b)) {
        return Err(Error::Parse(format!(
            "{ATTRIBUTE} sequence must contain only A, C, G, T: '{value}'"
        )));
    }
    let mut triplet = [0u8; 3];
    for (slot, &b) in triplet.iter_mut().zip(bytes) {
        *slot = match b.to_ascii_uppercase() {
            b'U' => b'T',
            other => other,
        };
    }
    Ok(triplet)
}

impl FromStr for CodonException {
    type Err = Error;

    /// Parse `(seq:"TRIPLET",aa:NAME)`; the quotes are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs = parse_pairs(s, ATTRIBUTE, &["seq", "aa"])?;
        let seq = pair_value(&pairs, "seq");
        let seq = seq
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(seq)
            .trim();
        let triplet = normalize_triplet(seq)?;
        let amino_acid = amino_acid::one_letter_code(pair_value(&pairs, "aa"))?;
        Ok(Self {
            triplet,
            amino_acid,
        })
    }
}

impl fmt::Display for CodonException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = amino_acid::three_letter_name(self.amino_acid).unwrap_or("OTHER");
        write!(f, "(seq:\"{}\",aa:{name})", self.triplet_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_and_unquoted() {
        let quoted: CodonException = "(seq:\"TGA\",aa:Trp)".parse().unwrap();
        let bare: CodonException = "(seq:TGA,aa:Trp)".parse().unwrap();
        assert_eq!(quoted, bare);
        assert_eq!(quoted.triplet, *b"TGA");
        assert_eq!(quoted.amino_acid, 'W');
    }

    #[test]
    fn whitespace_and_case_insensitive() {
        let a: CodonException = "(seq:tga,aa:Trp)".parse().unwrap();
        let b: CodonException = "( seq : TGA , aa : TRP )".parse().unwrap();
        assert_eq!(a, b);
        let c: CodonException = "(SEQ: \" uga \" ,AA:trp)".parse().unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn wrong_length() {
        assert!("(seq:TG,aa:Trp)".parse::<CodonException>().is_err());
        assert!("(seq:TGAA,aa:Trp)".parse::<CodonException>().is_err());
        assert!("(seq:\"\",aa:Trp)".parse::<CodonException>().is_err());
    }

    #[test]
    fn ambiguous_triplet_rejected() {
        assert!("(seq:TGN,aa:Trp)".parse::<CodonException>().is_err());
        assert!(CodonException::new("TRA", 'W').is_err());
    }

    #[test]
    fn missing_parts() {
        assert!("seq:TGA,aa:Trp".parse::<CodonException>().is_err());
        assert!("(seq:TGA)".parse::<CodonException>().is_err());
        assert!("(aa:Trp)".parse::<CodonException>().is_err());
        assert!("(seq:TGA,aa:Nope)".parse::<CodonException>().is_err());
    }

    #[test]
    fn display_reparses() {
        let e = CodonException::new("tga", 'W').unwrap();
        assert_eq!(e.to_string(), "(seq:\"TGA\",aa:Trp)");
        assert_eq!(e.to_string().parse::<CodonException>().unwrap(), e);
    }
}
