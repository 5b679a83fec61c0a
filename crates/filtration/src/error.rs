use complex::ComplexError;
use thiserror::Error;

/// Errors raised while building or validating a filtered stream.
#[derive(Debug, Error)]
pub enum FiltrationError {
    /// The source complex is invalid (e.g. an out-of-range vertex index).
    #[error(transparent)]
    Complex(#[from] ComplexError),

    /// A simplex with no vertices or with a repeated vertex.
    #[error("degenerate simplex {vertices:?}")]
    DegenerateSimplex { vertices: Vec<u32> },

    /// A simplex above dimension 3.
    #[error("simplex {vertices:?} has dimension {dim}, above the supported maximum of 3")]
    UnsupportedDimension { vertices: Vec<u32>, dim: usize },

    /// The same vertex set was added twice.
    #[error("simplex {vertices:?} was added twice")]
    DuplicateSimplex { vertices: Vec<u32> },

    /// NaN cannot be ordered in a filtration.
    #[error("simplex {vertices:?} has a NaN filtration value")]
    NanValue { vertices: Vec<u32> },

    /// A facet of a stream entry is not in the stream.
    #[error("face {face:?} of simplex {simplex:?} is missing from the stream")]
    MissingFace { simplex: Vec<u32>, face: Vec<u32> },

    /// A facet enters the filtration strictly after its coface.
    #[error("face {face:?} enters at {face_value} after its coface {simplex:?} at {value}")]
    FaceAfterCoface {
        simplex: Vec<u32>,
        face: Vec<u32>,
        face_value: f64,
        value: f64,
    },
}
