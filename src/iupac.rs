//! IUPAC nucleotide ambiguity codes and codon expansion.

/// Returns the concrete bases an IUPAC nucleotide code stands for.
///
/// Lower-case input is accepted and `U` is treated as `T`. Returns `None` for
/// characters outside the IUPAC nucleotide alphabet.
#[must_use]
pub fn expand_base(base: u8) -> Option<&'static [u8]> {
    let bases = match base.to_ascii_uppercase() {
        b'A' => b"A".as_slice(),
        b'C' => b"C".as_slice(),
        b'G' => b"G".as_slice(),
        b'T' | b'U' => b"T".as_slice(),
        b'R' => b"AG".as_slice(),
        b'Y' => b"CT".as_slice(),
        b'S' => b"CG".as_slice(),
        b'W' => b"AT".as_slice(),
        b'K' => b"GT".as_slice(),
        b'M' => b"AC".as_slice(),
        b'B' => b"CGT".as_slice(),
        b'D' => b"AGT".as_slice(),
        b'H' => b"ACT".as_slice(),
        b'V' => b"ACG".as_slice(),
        b'N' => b"ACGT".as_slice(),
        _ => return None,
    };
    Some(bases)
}

/// Returns true if the character is one of A, C, G, T (or U), in either case.
#[must_use]
pub fn is_unambiguous_base(base: u8) -> bool {
    matches!(
        base,
        b'A' | b'C' | b'G' | b'T' | b'U' | b'a' | b'c' | b'g' | b't' | b'u'
    )
}

/// Returns true if any character of the codon is not A, C, G or T.
#[must_use]
pub fn is_ambiguous(codon: &[u8]) -> bool {
    codon.iter().any(|&b| !is_unambiguous_base(b))
}

/// Expands a codon into every concrete triplet consistent with its IUPAC codes.
///
/// The result is the Cartesian product of the allowed bases at each position, in
/// A, C, G, T order. Returns `None` if the codon is not exactly three IUPAC characters.
#[must_use]
pub fn expand_codon(codon: &[u8]) -> Option<Vec<[u8; 3]>> {
    if codon.len() != 3 {
        return None;
    }
    let first = expand_base(codon[0])?;
    let second = expand_base(codon[1])?;
    let third = expand_base(codon[2])?;

    let mut triplets = Vec::with_capacity(first.len() * second.len() * third.len());
    for &a in first {
        for &b in second {
            for &c in third {
                triplets.push([a, b, c]);
            }
        }
    }
    Some(triplets)
}
