use crate::alphabet::Residue;

/// Reward for aligning two equal residues. Mismatches and gaps cost nothing.
pub const MATCH_REWARD: usize = 1;

/// A cell coordinate: `i` indexes sequence A (rows), `j` sequence B (columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// One scored way of reaching a cell: from `(i-1, j)` (top), `(i-1, j-1)`
/// (diagonal) or `(i, j-1)` (left).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<R> {
    pub pair: (R, R),
    pub score: usize,
    pub source: Position,
}

impl<R: Residue> Candidate<R> {
    pub fn top(a: R, source_score: usize, source: Position) -> Self {
        Self {
            pair: (a, R::GAP),
            score: source_score,
            source,
        }
    }

    pub fn diagonal(a: R, b: R, source_score: usize, source: Position) -> Self {
        Self {
            pair: (a, b),
            score: source_score + pair_reward(a, b),
            source,
        }
    }

    pub fn left(b: R, source_score: usize, source: Position) -> Self {
        Self {
            pair: (R::GAP, b),
            score: source_score,
            source,
        }
    }
}

pub fn pair_reward<R: Residue>(a: R, b: R) -> usize {
    if a == b {
        MATCH_REWARD
    } else {
        0
    }
}

/// Pick the winning move for an interior cell.
///
/// Top replaces diagonal only with a strictly higher score, and left
/// replaces that winner only with a strictly higher score, so equal scores
/// resolve as diagonal, then top, then left. Changing this order changes
/// which of several optimal alignments is reported.
pub(crate) fn best_candidate<R: Residue>(
    top: Candidate<R>,
    diagonal: Candidate<R>,
    left: Candidate<R>,
) -> Candidate<R> {
    let upper = if top.score > diagonal.score {
        top
    } else {
        diagonal
    };
    if left.score > upper.score {
        left
    } else {
        upper
    }
}

/// Column counts of an alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    pub fn columns(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }

    /// Fraction of columns that are matches; 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        match self.columns() {
            0 => 0.0,
            n => self.matches as f64 / n as f64,
        }
    }
}
