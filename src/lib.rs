//! Jigsaw reassembly of square image tiles and pattern search over the result
//!
//! Tiles arrive in unknown positions and orientations. The assembler indexes
//! the border signatures of all 8 orientations of every tile and runs a
//! backtracking search to fit them into a square grid. The border-stripped
//! interiors are then stitched into one image, which is scanned in every
//! orientation for a fixed pixel pattern.

#![forbid(unsafe_code)]

/// Border index, backtracking assembly and pattern scanning
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, tiles, symmetries and assemblies
pub mod spatial;

pub use io::error::{PuzzleError, Result};
