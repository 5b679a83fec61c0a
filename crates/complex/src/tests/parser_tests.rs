use super::{raw_header, tetra_complex, triangle_complex};
use crate::*;
use anyhow::Result;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Cursor;
use tempfile::tempdir;

// -------------------- Well-formed input --------------------

#[test]
fn parse_triangle_from_bytes() -> Result<()> {
    let bytes = ComplexWriter::to_bytes(&triangle_complex())?;
    let cpx = ComplexParser::new().parse(&bytes[..])?;

    assert_eq!(cpx.cell_counts(), [3, 3, 1, 0]);
    assert_eq!(cpx.filtration_values(), &[0.0, 0.1, 0.2, 0.5, 0.6, 0.7, 1.0]);
    assert_eq!(cpx.incidence(1), &[0, 1, 1, 2, 0, 2]);
    assert_eq!(cpx.incidence(2), &[0, 1, 2]);
    assert!(cpx.incidence(3).is_empty());
    assert_eq!(cpx.header().total_cells, 7);
    assert_eq!(cpx.header().global_dimension, 2);
    assert_eq!(cpx.header().boundary_entries, 9);
    Ok(())
}

#[test]
fn parse_consumes_the_whole_file() -> Result<()> {
    let bytes = ComplexWriter::to_bytes(&tetra_complex())?;
    let mut cursor = Cursor::new(bytes.clone());
    ComplexParser::new().parse(&mut cursor)?;
    assert_eq!(cursor.position(), bytes.len() as u64);
    Ok(())
}

#[test]
fn parse_file_twice_is_identical() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("tetra.tsc");
    ComplexWriter::write_file(&path, &tetra_complex())?;

    let a = ComplexParser::new().parse_file(&path)?;
    let b = ComplexParser::new().parse_file(&path)?;
    assert_eq!(a, b);
    assert_eq!(a, tetra_complex());
    Ok(())
}

#[test]
fn parse_empty_complex() -> Result<()> {
    let mut data = raw_header(MAGIC, 0, 0, [0, 0, 0, 0]);
    data.write_i32::<LittleEndian>(0)?;
    let cpx = ComplexParser::new().strict(true).parse(&data[..])?;
    assert!(cpx.is_empty());
    assert_eq!(cpx.dimension(), None);
    Ok(())
}

#[test]
fn parser_does_not_range_check_indices() -> Result<()> {
    // 2 vertices, 1 edge pointing at vertex 9
    let mut data = raw_header(MAGIC, 3, 1, [2, 1, 0, 0]);
    for v in [0.0, 0.0, 1.0] {
        data.write_f64::<LittleEndian>(v)?;
    }
    data.write_i32::<LittleEndian>(2)?;
    data.write_i32::<LittleEndian>(0)?;
    data.write_i32::<LittleEndian>(9)?;

    let cpx = ComplexParser::new().parse(&data[..])?;
    assert!(matches!(
        cpx.validate_indices(),
        Err(ComplexError::OutOfRangeIndex { vertex: 9, .. })
    ));
    Ok(())
}

// -------------------- Magic --------------------

#[test]
fn bad_magic_is_rejected_after_twenty_bytes() {
    let bytes = ComplexWriter::to_bytes(&triangle_complex()).unwrap();
    let mut corrupted = bytes.clone();
    corrupted[..20].copy_from_slice(b"TTKExplicitComplex!!");

    let mut cursor = Cursor::new(corrupted);
    let err = ComplexParser::new().parse(&mut cursor).unwrap_err();
    match err {
        ComplexError::Format(msg) => assert!(msg.contains("bad magic"), "got: {}", msg),
        other => panic!("expected Format, got {:?}", other),
    }
    assert_eq!(cursor.position(), MAGIC_BYTES as u64);
}

#[test]
fn file_shorter_than_magic_is_truncated() {
    let err = ComplexParser::new().parse(&b"TTKSimplicial"[..]).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn magic_only_file_is_truncated() {
    let err = ComplexParser::new().parse(&MAGIC[..]).unwrap_err();
    assert!(matches!(
        err,
        ComplexError::Truncated {
            field: "total_cells",
            ..
        }
    ));
}

// -------------------- Truncation --------------------

#[test]
fn truncated_mid_edge_array() {
    // declares 5 edges but supplies indices for only 3
    let mut data = raw_header(MAGIC, 11, 1, [6, 5, 0, 0]);
    for i in 0..11 {
        data.write_f64::<LittleEndian>(i as f64).unwrap();
    }
    data.write_i32::<LittleEndian>(10).unwrap();
    for v in [0, 1, 1, 2, 2, 3] {
        data.write_i32::<LittleEndian>(v).unwrap();
    }

    let err = ComplexParser::new().parse(&data[..]).unwrap_err();
    match err {
        ComplexError::Truncated {
            field,
            needed,
            available,
            ..
        } => {
            assert_eq!(field, "edges");
            assert_eq!(needed, 40);
            assert_eq!(available, 24);
        }
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn truncated_filtration_values() {
    let bytes = ComplexWriter::to_bytes(&tetra_complex()).unwrap();
    let cut = &bytes[..HEADER_BYTES as usize + 8 * 3];
    let err = ComplexParser::new().parse(cut).unwrap_err();
    assert!(matches!(
        err,
        ComplexError::Truncated {
            field: "filtration_values",
            ..
        }
    ));
}

#[test]
fn every_proper_prefix_fails() {
    let bytes = ComplexWriter::to_bytes(&triangle_complex()).unwrap();
    for len in 0..bytes.len() {
        let err = ComplexParser::new().parse(&bytes[..len]).unwrap_err();
        assert!(err.is_truncated(), "prefix of {} bytes: {:?}", len, err);
    }
}

#[test]
fn negative_cell_count_is_format_error() {
    let data = raw_header(MAGIC, 0, 0, [1, -2, 0, 0]);
    let err = ComplexParser::new().parse(&data[..]).unwrap_err();
    match err {
        ComplexError::Format(msg) => assert!(msg.contains("negative cell count")),
        other => panic!("expected Format, got {:?}", other),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = ComplexParser::new()
        .parse_file("/tmp/no_such_complex_file.tsc")
        .unwrap_err();
    assert!(matches!(err, ComplexError::Io(_)));
}

// -------------------- Header consistency --------------------

fn mislabelled_triangle() -> Vec<u8> {
    let cpx = triangle_complex().with_header(Header {
        total_cells: 99,
        global_dimension: 2,
        boundary_entries: 9,
    });
    ComplexWriter::to_bytes(&cpx).unwrap()
}

#[test]
fn lenient_parser_accepts_header_mismatch() -> Result<()> {
    let cpx = ComplexParser::new().parse(&mislabelled_triangle()[..])?;
    assert_eq!(cpx.header().total_cells, 99);
    // sizes come from the per-dimension counts only
    assert_eq!(cpx.num_cells(), 7);
    Ok(())
}

#[test]
fn strict_parser_rejects_header_mismatch() {
    let err = ComplexParser::new()
        .strict(true)
        .parse(&mislabelled_triangle()[..])
        .unwrap_err();
    match err {
        ComplexError::HeaderMismatch {
            field,
            declared,
            derived,
        } => {
            assert_eq!(field, "total_cells");
            assert_eq!(declared, 99);
            assert_eq!(derived, 7);
        }
        other => panic!("expected HeaderMismatch, got {:?}", other),
    }
}
