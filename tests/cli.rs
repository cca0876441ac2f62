use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn fasta_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn global_align() -> Command {
    Command::new(env!("CARGO_BIN_EXE_global-align"))
}

#[test]
fn test_protein_report_on_stdout() {
    let input = fasta_file(">melanogaster\nABC\n>simulans\nABD\n");
    let output = global_align().arg(input.path()).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        ">melanogaster v simulans; 1 differences\nABC\nABD\n"
    );
}

#[test]
fn test_dna_report_to_file_with_sequences() {
    let input = fasta_file(">x\nACGT\n>y\nACT\n");
    let report = NamedTempFile::new().unwrap();

    let status = global_align()
        .arg(input.path())
        .args(["--alphabet", "dna", "--show-sequences", "--output"])
        .arg(report.path())
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(report.path()).unwrap();
    assert_eq!(
        text,
        ">x\n ACGT\n>y\n ACT\n\n>x v y; 1 differences\nACGT\nAC-T\n"
    );
}

#[test]
fn test_invalid_layout_fails() {
    let input = fasta_file(">x\nAC\n>y\nAC\n");
    let output = global_align()
        .arg(input.path())
        .args(["--block-size", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_single_record_fails() {
    let input = fasta_file(">lonely\nACDE\n");
    let output = global_align().arg(input.path()).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("two sequence records"));
}
