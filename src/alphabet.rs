//! Residue alphabets.
//!
//! Each alphabet is a closed enum plus one sentinel value that stands for
//! both "gap" and "unrecognised input". Encoding never fails: any character
//! outside the alphabet becomes the sentinel.

use std::fmt;

/// A residue drawn from a fixed, closed alphabet.
pub trait Residue: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable name (e.g. "protein").
    const NAME: &'static str;

    /// Sentinel for gaps and unknown characters.
    const GAP: Self;

    /// Map a single-letter code to a residue, or [`Self::GAP`] if the code
    /// is not part of the alphabet.
    fn encode(code: char) -> Self;

    /// Canonical single-letter rendering. The sentinel renders as `-`.
    fn decode(self) -> char;

    fn is_gap(self) -> bool {
        self == Self::GAP
    }
}

/// Index of `code` in a code table.
fn position_in(codes: &[char], code: char) -> Option<usize> {
    codes.iter().position(|&c| c == code)
}

/// Amino acids in single-letter form, including the ambiguity codes `B`
/// and `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    V,
    W,
    Y,
    Z,
    Gap,
}

impl AminoAcid {
    const ALL: [AminoAcid; 23] = [
        AminoAcid::A,
        AminoAcid::B,
        AminoAcid::C,
        AminoAcid::D,
        AminoAcid::E,
        AminoAcid::F,
        AminoAcid::G,
        AminoAcid::H,
        AminoAcid::I,
        AminoAcid::K,
        AminoAcid::L,
        AminoAcid::M,
        AminoAcid::N,
        AminoAcid::P,
        AminoAcid::Q,
        AminoAcid::R,
        AminoAcid::S,
        AminoAcid::T,
        AminoAcid::V,
        AminoAcid::W,
        AminoAcid::Y,
        AminoAcid::Z,
        AminoAcid::Gap,
    ];

    // Same order as `ALL`.
    const CODES: [char; 23] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T',
        'V', 'W', 'Y', 'Z', '-',
    ];
}

impl Residue for AminoAcid {
    const NAME: &'static str = "protein";
    const GAP: Self = AminoAcid::Gap;

    fn encode(code: char) -> Self {
        position_in(&Self::CODES, code)
            .map(|i| Self::ALL[i])
            .unwrap_or(AminoAcid::Gap)
    }

    fn decode(self) -> char {
        Self::CODES[self as usize]
    }
}

/// DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    Gap,
}

impl Nucleotide {
    const ALL: [Nucleotide; 5] = [
        Nucleotide::A,
        Nucleotide::C,
        Nucleotide::G,
        Nucleotide::T,
        Nucleotide::Gap,
    ];
    const CODES: [char; 5] = ['A', 'C', 'G', 'T', '-'];
}

impl Residue for Nucleotide {
    const NAME: &'static str = "dna";
    const GAP: Self = Nucleotide::Gap;

    fn encode(code: char) -> Self {
        position_in(&Self::CODES, code)
            .map(|i| Self::ALL[i])
            .unwrap_or(Nucleotide::Gap)
    }

    fn decode(self) -> char {
        Self::CODES[self as usize]
    }
}
