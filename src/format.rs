//! Text rendering of a finished alignment.
//!
//! ```text
//! >seq1 v seq2; 1 differences
//! ABC
//! ABD
//! ```
//!
//! Body lines are split into blocks of [`LayoutConfig::block_size`]
//! residues separated by one space, and wrapped as soon as a line reaches
//! [`LayoutConfig::line_width`] characters, block spaces included.
//! Consecutive line pairs are separated by a blank line.

use std::fmt;

use crate::alphabet::Residue;
use crate::config::LayoutConfig;
use crate::Aligner;

/// Two parallel output lines that always hold the same number of characters.
struct LinePair {
    top: String,
    bottom: String,
    width: usize,
}

impl LinePair {
    fn new() -> Self {
        Self {
            top: String::new(),
            bottom: String::new(),
            width: 0,
        }
    }

    fn push(&mut self, top: char, bottom: char) {
        self.top.push(top);
        self.bottom.push(bottom);
        self.width += 1;
    }

    fn flush_into(&mut self, out: &mut String) {
        out.push_str(&self.top);
        out.push('\n');
        out.push_str(&self.bottom);
        out.push('\n');
        *self = Self::new();
    }
}

pub fn header<R: Residue>(alignment: &Aligner<'_, R>) -> String {
    format!(
        ">{} v {}; {} differences\n",
        alignment.sequence_a().name(),
        alignment.sequence_b().name(),
        alignment.differences()
    )
}

/// Render `alignment` as a header line followed by wrapped, block-spaced
/// line pairs.
pub fn render<R, F>(alignment: &Aligner<'_, R>, decode: F, layout: &LayoutConfig) -> String
where
    R: Residue,
    F: Fn(R) -> char,
{
    let block_size = layout.block_size();
    let line_width = layout.line_width();
    let mut out = header(alignment);
    let mut lines = LinePair::new();

    for &(a, b) in &alignment.result().pairs {
        lines.push(decode(a), decode(b));

        if lines.width < line_width && lines.width % (block_size + 1) == block_size {
            lines.push(' ', ' ');
        }
        if lines.width >= line_width {
            lines.flush_into(&mut out);
            out.push('\n');
        }
    }

    if lines.width > 0 {
        lines.flush_into(&mut out);
    }
    out
}

impl<R: Residue> fmt::Display for Aligner<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, R::decode, &LayoutConfig::default()))
    }
}
