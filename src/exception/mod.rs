//! Parsers for the `transl_except` and `codon` feature attributes.
//!
//! Both attributes use a parenthesized list of `key:value` pairs, for example
//! `(pos:7..9,aa:Trp)` and `(seq:"TGA",aa:Trp)`. Whitespace around tokens is ignored
//! and keys are matched case-insensitively.

pub mod codon;
pub mod position;

pub use codon::CodonException;
pub use position::PositionException;

use crate::error::Error;

/// Split `(key:value,key:value)` into lower-cased keys and trimmed values.
///
/// Every key in `required` must be present exactly once and no other key is accepted.
fn parse_pairs<'a>(
    value: &'a str,
    attribute: &str,
    required: &[&str],
) -> Result<Vec<(String, &'a str)>, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Parse(format!("empty {attribute} value")));
    }
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| {
            Error::Parse(format!(
                "{attribute} value must be enclosed in parentheses: '{value}'"
            ))
        })?;

    let mut pairs: Vec<(String, &str)> = Vec::with_capacity(required.len());
    for part in inner.split(',') {
        let (key, val) = part.split_once(':').ok_or_else(|| {
            Error::Parse(format!("{attribute} entry missing ':': '{}'", part.trim()))
        })?;
        let key = key.trim().to_ascii_lowercase();
        if !required.contains(&key.as_str()) {
            return Err(Error::Parse(format!(
                "unrecognized {attribute} key '{key}' in '{value}'"
            )));
        }
        if pairs.iter().any(|(k, _)| *k == key) {
            return Err(Error::Parse(format!(
                "duplicate {attribute} key '{key}' in '{value}'"
            )));
        }
        pairs.push((key, val.trim()));
    }

    for key in required {
        if !pairs.iter().any(|(k, _)| k == key) {
            return Err(Error::Parse(format!(
                "{attribute} value missing '{key}': '{value}'"
            )));
        }
    }
    Ok(pairs)
}

/// Value of a key already checked by [`parse_pairs`].
fn pair_value<'a>(pairs: &[(String, &'a str)], key: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|&(_, v)| v)
        .unwrap_or_default()
}
