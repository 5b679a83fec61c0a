use complex::{ComplexWriter, Header, SimplicialComplex};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsc-persistence"));
    for key in ["TSC_MAX_DIM", "TSC_STRICT_HEADER", "TSC_KEEP_DIAGONAL", "TSC_LOG_FORMAT", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    cmd
}

fn run(args: &[&Path]) -> Output {
    bin().args(args).output().expect("failed to spawn binary")
}

/// Two vertices joined by an edge, plus an isolated vertex.
fn segment_and_point() -> SimplicialComplex {
    SimplicialComplex::new(
        [3, 1, 0, 0],
        vec![0.0, 0.2, 0.1, 1.5],
        vec![0, 1],
        vec![],
        vec![],
    )
    .unwrap()
}

fn hollow_square() -> SimplicialComplex {
    SimplicialComplex::new(
        [4, 4, 0, 0],
        vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0],
        vec![0, 1, 1, 2, 2, 3, 0, 3],
        vec![],
        vec![],
    )
    .unwrap()
}

#[test]
fn missing_arguments_prints_usage_and_succeeds() {
    let out = bin().output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Please provide input and output files"));

    let dir = tempdir().unwrap();
    let out = run(&[&dir.path().join("only.tsc")]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Please provide input and output files"));
}

#[test]
fn writes_diagram_for_small_complex() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("seg.tsc");
    let output = dir.path().join("seg.diag");
    ComplexWriter::write_file(&input, &segment_and_point()).unwrap();

    let out = run(&[&input, &output]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    // v1 (0.2) dies when the edge (1.5) merges it into v0; v0 and v2 survive.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "0 0.2 1.5\n0 0.0 inf\n0 0.1 inf\n"
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Number of cells: 4"));
    assert!(stdout.contains("Global dataset dimension: 1"));
    assert!(stdout.contains("  3 cells of dimension 0"));
    assert!(stdout.contains("  1 cells of dimension 1"));
    assert!(stdout.contains("Number of entries in boundary matrix: 2"));
    assert!(stdout.contains("Read TTK Simplicial Complex file:"));
    assert!(stdout.contains("Computed diagram in"));
    assert!(stdout.contains("Wrote 3 pairs to"));
}

#[test]
fn hollow_square_has_essential_loop() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sq.tsc");
    let output = dir.path().join("sq.diag");
    ComplexWriter::write_file(&input, &hollow_square()).unwrap();

    let out = run(&[&input, &output]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "0 0.0 1.0\n0 0.0 1.0\n0 0.0 1.0\n0 0.0 inf\n1 2.0 inf\n"
    );
}

#[test]
fn dimension_bound_limits_reported_dimensions() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sq.tsc");
    let output = dir.path().join("sq.diag");
    ComplexWriter::write_file(&input, &hollow_square()).unwrap();

    let out = bin().env("TSC_MAX_DIM", "1").arg(&input).arg(&output).output().unwrap();
    assert!(out.status.success());
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.lines().all(|l| l.starts_with("0 ")));
    assert!(text.contains("0 0.0 inf"));
}

#[test]
fn overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("seg.tsc");
    let output = dir.path().join("seg.diag");
    ComplexWriter::write_file(&input, &segment_and_point()).unwrap();
    fs::write(&output, "stale content that is longer than the diagram\n".repeat(10)).unwrap();

    assert!(run(&[&input, &output]).status.success());
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 3);
}

#[test]
fn bad_magic_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.tsc");
    let output = dir.path().join("bad.diag");
    fs::write(&input, b"NotASimplicialComplexFile").unwrap();

    let out = run(&[&input, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad magic"));
    assert!(!output.exists());
}

#[test]
fn truncated_file_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("short.tsc");
    let output = dir.path().join("short.diag");
    let bytes = ComplexWriter::to_bytes(&segment_and_point()).unwrap();
    fs::write(&input, &bytes[..bytes.len() - 3]).unwrap();

    let out = run(&[&input, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("truncated"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let out = run(&[&dir.path().join("nope.tsc"), &dir.path().join("out.diag")]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn strict_header_rejects_inconsistent_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("hdr.tsc");
    let output = dir.path().join("hdr.diag");
    let cpx = segment_and_point().with_header(Header {
        total_cells: 99,
        global_dimension: 1,
        boundary_entries: 2,
    });
    ComplexWriter::write_file(&input, &cpx).unwrap();

    // Lenient by default: the header is informational only.
    assert!(run(&[&input, &output]).status.success());

    let out = bin()
        .env("TSC_STRICT_HEADER", "true")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("total_cells"));
}

#[test]
fn empty_complex_writes_empty_diagram() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.tsc");
    let output = dir.path().join("empty.diag");
    let cpx = SimplicialComplex::new([0; 4], vec![], vec![], vec![], vec![]).unwrap();
    ComplexWriter::write_file(&input, &cpx).unwrap();

    let out = run(&[&input, &output]);
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}
