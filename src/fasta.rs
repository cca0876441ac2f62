//! Reading the two sequences to align from a FASTA file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use needletail::{parse_fastx_reader, FastxReader};

use crate::alphabet::Residue;
use crate::{AlignerError, Sequence};

/// Read the first two records of a FASTA file (plain or gzipped).
pub fn read_pair<R: Residue>(
    path: impl AsRef<Path>,
) -> Result<(Sequence<R>, Sequence<R>), AlignerError> {
    let path = path.as_ref();
    info!("reading {} sequences from {}", R::NAME, path.display());
    let file = File::open(path)?;
    read_pair_from_reader(file)
}

/// Read the first two records from any FASTA source.
///
/// The record name is the whole header line after `>`. Whitespace inside
/// sequence lines is skipped and every other character is encoded with
/// [`Residue::encode`].
pub fn read_pair_from_reader<R, T>(reader: T) -> Result<(Sequence<R>, Sequence<R>), AlignerError>
where
    R: Residue,
    T: Read + Send + 'static,
{
    let mut records = parse_fastx_reader(reader).map_err(|e| AlignerError::Parse(e.to_string()))?;

    let first = next_sequence(records.as_mut())?.ok_or(AlignerError::MissingRecords(0))?;
    let second = next_sequence(records.as_mut())?.ok_or(AlignerError::MissingRecords(1))?;

    let mut extra = 0;
    while let Some(record) = records.next() {
        record.map_err(|e| AlignerError::Parse(e.to_string()))?;
        extra += 1;
    }
    if extra > 0 {
        warn!("ignoring {} record(s) after the first two", extra);
    }

    info!(
        "read `{}` ({} residues) and `{}` ({} residues)",
        first.name(),
        first.len(),
        second.name(),
        second.len()
    );
    Ok((first, second))
}

fn next_sequence<R: Residue>(
    records: &mut dyn FastxReader,
) -> Result<Option<Sequence<R>>, AlignerError> {
    let record = match records.next() {
        Some(record) => record.map_err(|e| AlignerError::Parse(e.to_string()))?,
        None => return Ok(None),
    };

    let name = String::from_utf8_lossy(record.id()).trim_end().to_string();
    let residues = record
        .seq()
        .iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|&b| R::encode(b as char))
        .collect();

    Ok(Some(Sequence::new(name, residues)))
}
