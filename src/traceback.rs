use log::debug;

use crate::alphabet::Residue;
use crate::scoring::{AlignmentStats, Candidate, Position};

/// Residue pair of an alignment column, A first.
pub type ResiduePair<R> = (R, R);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Gap in sequence A.
    Insertion,
    /// Gap in sequence B.
    Deletion,
}

impl TracebackOperation {
    pub fn of<R: Residue>(pair: ResiduePair<R>) -> Self {
        match pair {
            (a, b) if a == b => TracebackOperation::Match,
            (a, _) if a.is_gap() => TracebackOperation::Insertion,
            (_, b) if b.is_gap() => TracebackOperation::Deletion,
            _ => TracebackOperation::Mismatch,
        }
    }
}

/// Final alignment: gapped residue pairs from the start of both sequences
/// to their end, and the number of columns whose residues differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult<R> {
    pub pairs: Vec<ResiduePair<R>>,
    pub differences: usize,
}

impl<R: Residue> AlignmentResult<R> {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn operations(&self) -> Vec<TracebackOperation> {
        self.pairs.iter().map(|&pair| TracebackOperation::of(pair)).collect()
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations()
            .into_iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
                }
                acc
            })
    }

    pub fn identity(&self) -> f64 {
        self.stats().identity()
    }

    /// The two gapped rows, rendered with `decode`.
    pub fn aligned_strings<F>(&self, decode: F) -> (String, String)
    where
        F: Fn(R) -> char,
    {
        self.pairs
            .iter()
            .map(|&(a, b)| (decode(a), decode(b)))
            .unzip()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AlignmentCell<R> {
    pub pair: ResiduePair<R>,
    pub score: usize,
    /// `None` only at the origin.
    pub predecessor: Option<Position>,
}

impl<R: Residue> AlignmentCell<R> {
    pub fn origin() -> Self {
        Self {
            pair: (R::GAP, R::GAP),
            score: 0,
            predecessor: None,
        }
    }
}

impl<R: Residue> From<Candidate<R>> for AlignmentCell<R> {
    fn from(candidate: Candidate<R>) -> Self {
        Self {
            pair: candidate.pair,
            score: candidate.score,
            predecessor: Some(candidate.source),
        }
    }
}

/// Dense `rows × cols` cell matrix in one row-major allocation.
///
/// Cells are appended in row-major order while the forward pass runs, so a
/// cell may only be read once every cell before it has been pushed.
pub(crate) struct TracebackMatrix<R> {
    data: Vec<AlignmentCell<R>>,
    rows: usize,
    cols: usize,
}

impl<R: Residue> TracebackMatrix<R> {
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            data: Vec::with_capacity(rows * cols),
            rows,
            cols,
        }
    }

    pub fn push(&mut self, cell: AlignmentCell<R>) {
        debug_assert!(self.data.len() < self.rows * self.cols);
        self.data.push(cell);
    }

    pub fn get(&self, pos: Position) -> &AlignmentCell<R> {
        &self.data[pos.i * self.cols + pos.j]
    }

    pub fn last_position(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    pub fn is_complete(&self) -> bool {
        self.data.len() == self.rows * self.cols
    }
}

pub(crate) struct Traceback<'m, R> {
    matrix: &'m TracebackMatrix<R>,
}

impl<'m, R: Residue> Traceback<'m, R> {
    pub fn new(matrix: &'m TracebackMatrix<R>) -> Self {
        Self { matrix }
    }

    /// Walk predecessors from the last cell back to the origin.
    pub fn reconstruct_alignment(&self) -> AlignmentResult<R> {
        debug_assert!(self.matrix.is_complete());

        let mut pairs = Vec::new();
        let mut differences = 0;

        let mut cell = self.matrix.get(self.matrix.last_position());
        while let Some(previous) = cell.predecessor {
            let (a, b) = cell.pair;
            if a != b {
                differences += 1;
            }
            pairs.push(cell.pair);
            cell = self.matrix.get(previous);
        }

        // Built backwards.
        pairs.reverse();

        debug!(
            "traceback produced {} columns with {} differences",
            pairs.len(),
            differences
        );

        AlignmentResult { pairs, differences }
    }
}
