//! `transl_except`: residue override for a nucleotide range.

use std::fmt;
use std::str::FromStr;

use crate::amino_acid;
use crate::error::Error;

use super::{pair_value, parse_pairs};

const ATTRIBUTE: &str = "transl_except";

/// Forces the codon spanning `start..=end` (1-based, inclusive) to `amino_acid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionException {
    pub start: usize,
    pub end: usize,
    pub amino_acid: char,
}

impl PositionException {
    #[must_use]
    pub fn new(start: usize, end: usize, amino_acid: char) -> Self {
        Self {
            start,
            end,
            amino_acid,
        }
    }

    /// Whether the exception covers exactly `start..=end`.
    #[must_use]
    pub fn matches(&self, start: usize, end: usize) -> bool {
        self.start == start && self.end == end
    }
}

fn parse_position(value: &str, raw: &str) -> Result<usize, Error> {
    value.trim().parse().map_err(|e| {
        Error::Parse(format!(
            "invalid {ATTRIBUTE} position '{}' in '{raw}': {e}",
            value.trim()
        ))
    })
}

impl FromStr for PositionException {
    type Err = Error;

    /// Parse `(pos:START[..END],aa:NAME)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs = parse_pairs(s, ATTRIBUTE, &["pos", "aa"])?;
        let pos = pair_value(&pairs, "pos");

        let (start, end) = match pos.split_once("..") {
            Some((start, end)) => (parse_position(start, s)?, parse_position(end, s)?),
            None => {
                let single = parse_position(pos, s)?;
                (single, single)
            }
        };
        if start > end {
            return Err(Error::Parse(format!(
                "{ATTRIBUTE} start {start} is after end {end} in '{s}'"
            )));
        }

        let amino_acid = amino_acid::one_letter_code(pair_value(&pairs, "aa"))?;
        Ok(Self {
            start,
            end,
            amino_acid,
        })
    }
}

impl fmt::Display for PositionException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = amino_acid::three_letter_name(self.amino_acid).unwrap_or("OTHER");
        if self.start == self.end {
            write!(f, "(pos:{},aa:{name})", self.start)
        } else {
            write!(f, "(pos:{}..{},aa:{name})", self.start, self.end)
        }
    }
}
