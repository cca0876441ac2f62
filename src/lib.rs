//! Global pairwise alignment of residue sequences.
//!
//! The engine fills a dense dynamic-programming matrix in which a residue
//! match scores 1 and every other move scores 0, so the best score is the
//! length of the longest common subsequence. A traceback from the last cell
//! yields the gapped residue pairs and the number of differing columns.
//!
//! ```
//! use global_aligner::{Aligner, AminoAcid, Sequence};
//!
//! let a: Sequence<AminoAcid> = Sequence::from_text("a", "ABC");
//! let b: Sequence<AminoAcid> = Sequence::from_text("b", "ABD");
//! let aligner = Aligner::new(&a, &b).unwrap();
//! assert_eq!(aligner.differences(), 1);
//! assert_eq!(aligner.to_string(), ">a v b; 1 differences\nABC\nABD\n");
//! ```

use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod alphabet;
pub mod config;
pub mod fasta;
pub mod format;
pub mod scoring;
pub mod traceback;

pub use alphabet::{AminoAcid, Nucleotide, Residue};
pub use config::LayoutConfig;
pub use scoring::{AlignmentStats, Position};
pub use traceback::{AlignmentResult, ResiduePair, TracebackOperation};

use scoring::{best_candidate, Candidate};
use traceback::{AlignmentCell, Traceback, TracebackMatrix};

/// Residues per line in FASTA output.
pub const FASTA_LINE_RESIDUES: usize = 60;
/// Residues per space-separated block in FASTA output.
pub const FASTA_BLOCK_RESIDUES: usize = 10;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("index {index} out of range for sequence `{name}` of length {length}")]
    OutOfRange {
        name: String,
        index: usize,
        length: usize,
    },
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("failed to parse sequence file: {0}")]
    Parse(String),
    #[error("expected two sequence records, found {0}")]
    MissingRecords(usize),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A named, immutable list of residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<R> {
    name: String,
    residues: Vec<R>,
}

impl<R: Residue> Sequence<R> {
    pub fn new(name: impl Into<String>, residues: Vec<R>) -> Self {
        Self {
            name: name.into(),
            residues,
        }
    }

    /// Encode every non-whitespace character of `text`. Characters outside
    /// the alphabet become [`Residue::GAP`].
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let residues = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(R::encode)
            .collect();
        Self::new(name, residues)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<R, AlignerError> {
        self.residues
            .get(index)
            .copied()
            .ok_or_else(|| AlignerError::OutOfRange {
                name: self.name.clone(),
                index,
                length: self.residues.len(),
            })
    }

    pub fn residues(&self) -> &[R] {
        &self.residues
    }

    /// FASTA record with 60 residues per line in space-separated blocks of 10.
    pub fn to_fasta(&self) -> String {
        let mut out = format!(">{}", self.name);
        for (i, residue) in self.residues.iter().enumerate() {
            if i % FASTA_LINE_RESIDUES == 0 {
                out.push('\n');
            }
            if i % FASTA_BLOCK_RESIDUES == 0 {
                out.push(' ');
            }
            out.push(residue.decode());
        }
        out
    }
}

/// Global alignment of two borrowed sequences, computed eagerly by
/// [`Aligner::new`].
pub struct Aligner<'a, R> {
    sequence_a: &'a Sequence<R>,
    sequence_b: &'a Sequence<R>,
    matrix: TracebackMatrix<R>,
    result: AlignmentResult<R>,
}

impl<'a, R: Residue> Aligner<'a, R> {
    /// Fill the matrix and trace back the optimal path.
    ///
    /// Empty sequences are valid and align as pure insertions.
    pub fn new(sequence_a: &'a Sequence<R>, sequence_b: &'a Sequence<R>) -> Result<Self, AlignerError> {
        let start_time = Instant::now();

        let matrix = Self::fill_matrix(sequence_a, sequence_b)?;
        let result = Traceback::new(&matrix).reconstruct_alignment();

        debug!(
            "aligned `{}` ({}) v `{}` ({}): score {}, {} differences in {:?}",
            sequence_a.name(),
            sequence_a.len(),
            sequence_b.name(),
            sequence_b.len(),
            matrix.get(matrix.last_position()).score,
            result.differences,
            start_time.elapsed()
        );

        Ok(Self {
            sequence_a,
            sequence_b,
            matrix,
            result,
        })
    }

    fn fill_matrix(a: &Sequence<R>, b: &Sequence<R>) -> Result<TracebackMatrix<R>, AlignerError> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        debug!("filling {}x{} alignment matrix", rows, cols);

        let mut matrix = TracebackMatrix::with_dimensions(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                let cell = match (i, j) {
                    (0, 0) => AlignmentCell::origin(),
                    (0, _) => {
                        let source = Position::new(0, j - 1);
                        Candidate::left(b.get(j - 1)?, matrix.get(source).score, source).into()
                    }
                    (_, 0) => {
                        let source = Position::new(i - 1, 0);
                        Candidate::top(a.get(i - 1)?, matrix.get(source).score, source).into()
                    }
                    _ => {
                        let residue_a = a.get(i - 1)?;
                        let residue_b = b.get(j - 1)?;

                        let above = Position::new(i - 1, j);
                        let diagonal = Position::new(i - 1, j - 1);
                        let before = Position::new(i, j - 1);

                        best_candidate(
                            Candidate::top(residue_a, matrix.get(above).score, above),
                            Candidate::diagonal(
                                residue_a,
                                residue_b,
                                matrix.get(diagonal).score,
                                diagonal,
                            ),
                            Candidate::left(residue_b, matrix.get(before).score, before),
                        )
                        .into()
                    }
                };
                matrix.push(cell);
            }
        }

        Ok(matrix)
    }

    pub fn sequence_a(&self) -> &'a Sequence<R> {
        self.sequence_a
    }

    pub fn sequence_b(&self) -> &'a Sequence<R> {
        self.sequence_b
    }

    pub fn result(&self) -> &AlignmentResult<R> {
        &self.result
    }

    pub fn into_result(self) -> AlignmentResult<R> {
        self.result
    }

    pub fn differences(&self) -> usize {
        self.result.differences
    }

    /// Score of the final cell: the longest common subsequence length.
    pub fn score(&self) -> usize {
        self.matrix.get(self.matrix.last_position()).score
    }

    #[cfg(test)]
    fn cell(&self, i: usize, j: usize) -> &AlignmentCell<R> {
        self.matrix.get(Position::new(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protein(name: &str, text: &str) -> Sequence<AminoAcid> {
        Sequence::from_text(name, text)
    }

    fn pairs(top: &str, bottom: &str) -> Vec<ResiduePair<AminoAcid>> {
        top.chars()
            .zip(bottom.chars())
            .map(|(a, b)| (AminoAcid::encode(a), AminoAcid::encode(b)))
            .collect()
    }

    #[test]
    fn test_sequence_access() {
        let seq = protein("seq1", "MK V\nL");
        assert_eq!(seq.name(), "seq1");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.get(0).unwrap(), AminoAcid::M);
        assert_eq!(seq.get(3).unwrap(), AminoAcid::L);
        assert_eq!(seq.residues()[2], AminoAcid::V);
    }

    #[test]
    fn test_sequence_out_of_range() {
        let seq = protein("short", "AC");
        match seq.get(2) {
            Err(AlignerError::OutOfRange { name, index, length }) => {
                assert_eq!(name, "short");
                assert_eq!(index, 2);
                assert_eq!(length, 2);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
        assert!(protein("empty", "").get(0).is_err());
    }

    #[test]
    fn test_to_fasta_layout() {
        let seq = protein("p", &"A".repeat(25));
        assert_eq!(seq.to_fasta(), ">p\n AAAAAAAAAA AAAAAAAAAA AAAAA");

        let long = protein("q", &"C".repeat(61));
        let fasta = long.to_fasta();
        let lines: Vec<&str> = fasta.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 66);
        assert_eq!(lines[2], " C");
    }

    #[test]
    fn test_substitution() {
        let a = protein("a", "ABC");
        let b = protein("b", "ABD");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.result().pairs, pairs("ABC", "ABD"));
        assert_eq!(aligner.differences(), 1);
        assert_eq!(aligner.score(), 2);
    }

    #[test]
    fn test_empty_first_sequence() {
        let a = protein("a", "");
        let b = protein("b", "AB");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.result().pairs, pairs("--", "AB"));
        assert_eq!(aligner.differences(), 2);
        assert_eq!(aligner.score(), 0);
    }

    #[test]
    fn test_both_empty() {
        let a = protein("a", "");
        let b = protein("b", "");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert!(aligner.result().is_empty());
        assert_eq!(aligner.differences(), 0);
    }

    #[test]
    fn test_trailing_deletion_predecessors() {
        let a = protein("a", "AB");
        let b = protein("b", "A");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.result().pairs, pairs("AB", "A-"));
        assert_eq!(aligner.differences(), 1);

        // (2,1): top scores 1, diagonal 0, left 0.
        let last = aligner.cell(2, 1);
        assert_eq!(last.predecessor, Some(Position::new(1, 1)));
        assert_eq!(last.pair, (AminoAcid::B, AminoAcid::Gap));
        assert_eq!(last.score, 1);

        let matched = aligner.cell(1, 1);
        assert_eq!(matched.predecessor, Some(Position::new(0, 0)));
        assert_eq!(matched.pair, (AminoAcid::A, AminoAcid::A));
        assert!(aligner.cell(0, 0).predecessor.is_none());
    }

    #[test]
    fn test_three_way_tie_prefers_diagonal() {
        let a = protein("a", "A");
        let b = protein("b", "B");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.cell(1, 1).predecessor, Some(Position::new(0, 0)));
        assert_eq!(aligner.result().pairs, pairs("A", "B"));
        assert_eq!(aligner.differences(), 1);
    }

    #[test]
    fn test_top_left_tie_prefers_top() {
        let a = protein("a", "AB");
        let b = protein("b", "BA");
        let aligner = Aligner::new(&a, &b).unwrap();
        let cell = aligner.cell(2, 2);
        assert_eq!(cell.predecessor, Some(Position::new(1, 2)));
        assert_eq!(cell.pair, (AminoAcid::B, AminoAcid::Gap));
        assert_eq!(aligner.result().pairs, pairs("-AB", "BA-"));
        assert_eq!(aligner.differences(), 2);
    }

    #[test]
    fn test_edges_are_gap_runs() {
        let a = protein("a", "KL");
        let b = protein("b", "MN");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.cell(0, 2).predecessor, Some(Position::new(0, 1)));
        assert_eq!(aligner.cell(0, 2).pair, (AminoAcid::Gap, AminoAcid::N));
        assert_eq!(aligner.cell(2, 0).predecessor, Some(Position::new(1, 0)));
        assert_eq!(aligner.cell(2, 0).pair, (AminoAcid::L, AminoAcid::Gap));
    }

    #[test]
    fn test_protein_pair() {
        let a = protein("a", "HEAGAWGHEE");
        let b = protein("b", "PAWHEAE");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.score(), 5);
        assert_eq!(aligner.differences(), 6);
        assert_eq!(
            aligner.result().pairs,
            pairs("HEAGAWGHE-E", "---PAW-HEAE")
        );
        let stats = aligner.result().stats();
        assert_eq!(stats.matches, 5);
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.gaps, 5);
    }

    #[test]
    fn test_unknown_residues_align_as_gap() {
        // `X` is outside the alphabet and is absorbed as the gap sentinel.
        let a = protein("a", "AXC");
        let b = protein("b", "A-C");
        let aligner = Aligner::new(&a, &b).unwrap();
        assert_eq!(aligner.differences(), 0);
        assert_eq!(aligner.score(), 3);
    }

    #[test]
    fn test_into_result() {
        let a: Sequence<Nucleotide> = Sequence::from_text("a", "ACGT");
        let b: Sequence<Nucleotide> = Sequence::from_text("b", "ACGT");
        let result = Aligner::new(&a, &b).unwrap().into_result();
        assert_eq!(result.differences, 0);
        assert_eq!(result.len(), 4);
    }
}
