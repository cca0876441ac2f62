use global_aligner::{Aligner, AminoAcid, Residue, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seq1: Sequence<AminoAcid> = Sequence::from_text("seq1", "HEAGAWGHEE");
    let seq2: Sequence<AminoAcid> = Sequence::from_text("seq2", "PAWHEAE");

    let aligner = Aligner::new(&seq1, &seq2)?;
    let result = aligner.result();
    let (aligned1, aligned2) = result.aligned_strings(AminoAcid::decode);

    println!("Score: {}", aligner.score());
    println!("Aligned sequence 1: {}", aligned1);
    println!("Aligned sequence 2: {}", aligned2);
    println!("Operations: {:?}", result.operations());
    println!();
    print!("{}", aligner);

    Ok(())
}
