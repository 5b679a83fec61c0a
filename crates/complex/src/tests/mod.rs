mod parser_tests;

use crate::SimplicialComplex;
use byteorder::{LittleEndian, WriteBytesExt};

/// One filled triangle: 3 vertices, 3 edges, 1 triangle.
pub(crate) fn triangle_complex() -> SimplicialComplex {
    SimplicialComplex::new(
        [3, 3, 1, 0],
        vec![0.0, 0.1, 0.2, 0.5, 0.6, 0.7, 1.0],
        vec![0, 1, 1, 2, 0, 2],
        vec![0, 1, 2],
        vec![],
    )
    .unwrap()
}

/// A full tetrahedron: 4 vertices, 6 edges, 4 triangles, 1 tetrahedron.
pub(crate) fn tetra_complex() -> SimplicialComplex {
    let mut values: Vec<f64> = (0..4).map(|i| i as f64).collect();
    values.extend((0..6).map(|i| 10.0 + i as f64));
    values.extend((0..4).map(|i| 20.0 + i as f64));
    values.push(30.0);
    SimplicialComplex::new(
        [4, 6, 4, 1],
        values,
        vec![0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 2, 3],
        vec![0, 1, 2, 0, 1, 3, 0, 2, 3, 1, 2, 3],
        vec![0, 1, 2, 3],
    )
    .unwrap()
}

/// Hand-encodes the 44-byte header so tests can append arbitrary bodies.
pub(crate) fn raw_header(magic: &[u8], total: i32, dim: i32, counts: [i32; 4]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(magic);
    buf.write_i32::<LittleEndian>(total).unwrap();
    buf.write_i32::<LittleEndian>(dim).unwrap();
    for c in counts {
        buf.write_i32::<LittleEndian>(c).unwrap();
    }
    buf
}
