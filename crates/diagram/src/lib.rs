//! # Diagram - persistence pairs as text
//!
//! One interval per line, dimensions 0, 1 then 2, intervals in the order the
//! algorithm produced them:
//!
//! ```text
//! <dimension> <birth> <death>
//! 0 0.0 1.5
//! 0 0.2 inf
//! 1 3.0 4.0
//! ```
//!
//! Numbers use Rust's shortest round-trip float form with a mandatory
//! fractional part (`0.0`, `1.5`, `1e-7`); a right-infinite interval is
//! written with the literal death `inf`.

mod reader;
mod writer;

pub use reader::PairReader;
pub use writer::{PairWriter, DIAGRAM_DIMENSIONS};
