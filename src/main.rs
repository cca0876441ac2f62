use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use global_aligner::{fasta, format, Aligner, AminoAcid, LayoutConfig, Nucleotide, Residue};
use log::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetKind {
    Protein,
    Dna,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Global alignment of the two records in a FASTA file", long_about = None)]
struct Args {
    /// Input FASTA file with two records (plain or gzipped)
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Residue alphabet of the input
    #[arg(short, long, value_enum, default_value = "protein")]
    alphabet: AlphabetKind,

    /// Residues per space-separated block
    #[arg(long, default_value = "10")]
    block_size: usize,

    /// Characters per output line, spaces included
    #[arg(long, default_value = "65")]
    line_width: usize,

    /// Print both input records in FASTA layout before the alignment
    #[arg(long)]
    show_sequences: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn report<R: Residue>(input: &Path, layout: &LayoutConfig, show_sequences: bool) -> Result<String> {
    let (sequence_a, sequence_b) = fasta::read_pair::<R>(input)
        .with_context(|| format!("failed to read sequences from {}", input.display()))?;

    let aligner = Aligner::new(&sequence_a, &sequence_b).context("alignment failed")?;
    let stats = aligner.result().stats();
    info!(
        "{} columns: {} matches, {} mismatches, {} gaps ({:.2}% identity)",
        stats.columns(),
        stats.matches,
        stats.mismatches,
        stats.gaps,
        stats.identity() * 100.0
    );

    let mut out = String::new();
    if show_sequences {
        out.push_str(&sequence_a.to_fasta());
        out.push('\n');
        out.push_str(&sequence_b.to_fasta());
        out.push_str("\n\n");
    }
    out.push_str(&format::render(&aligner, R::decode, layout));
    Ok(out)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let layout = LayoutConfig::try_new(args.block_size, args.line_width)
        .context("invalid layout options")?;

    let text = match args.alphabet {
        AlphabetKind::Protein => report::<AminoAcid>(&args.input, &layout, args.show_sequences)?,
        AlphabetKind::Dna => report::<Nucleotide>(&args.input, &layout, args.show_sequences)?,
    };

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    output.write_all(text.as_bytes())?;
    output.flush()?;

    Ok(())
}
