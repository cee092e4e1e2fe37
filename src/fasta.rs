//! Reader for nucleotide FASTA input, plain or gzip-compressed.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First whitespace-delimited token of the header.
    pub id: String,
    /// Remainder of the header, possibly empty.
    pub description: String,
    /// Upper-cased bases with line breaks removed.
    pub sequence: Vec<u8>,
}

/// Reads every record from a FASTA file. Gzip input is detected from its magic bytes.
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>, Error> {
    let file = File::open(path)?;
    parse_fasta_auto(file)
}

/// Reads FASTA from any reader, decompressing when the stream starts with the gzip magic.
pub fn parse_fasta_auto<R: Read>(reader: R) -> Result<Vec<FastaRecord>, Error> {
    let mut buf_reader = BufReader::new(reader);
    let is_gzip = buf_reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    if is_gzip {
        parse_fasta(BufReader::new(MultiGzDecoder::new(buf_reader)))
    } else {
        parse_fasta(buf_reader)
    }
}

/// Reads FASTA from a buffered reader.
///
/// Blank lines are skipped and sequence lines before the first header are an error.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, Error> {
    let mut records: Vec<FastaRecord> = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(header) = trimmed.strip_prefix('>') {
            records.extend(current.take());
            current = Some(parse_header(header)?);
        } else if let Some(record) = current.as_mut() {
            let start = record.sequence.len();
            record.sequence.extend_from_slice(trimmed.as_bytes());
            record.sequence[start..].make_ascii_uppercase();
        } else {
            return Err(Error::Parse(format!(
                "sequence data before the first FASTA header: '{trimmed}'"
            )));
        }
    }

    records.extend(current);
    Ok(records)
}

fn parse_header(header: &str) -> Result<FastaRecord, Error> {
    let header = header.trim();
    let (id, description) = header
        .split_once(char::is_whitespace)
        .unwrap_or((header, ""));
    if id.is_empty() {
        return Err(Error::Parse("empty FASTA header".to_string()));
    }
    Ok(FastaRecord {
        id: id.to_string(),
        description: description.trim().to_string(),
        sequence: Vec::new(),
    })
}
