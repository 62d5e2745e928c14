//! Spatial data structures
//!
//! This module contains the geometric side of the puzzle:
//! - Pixel grids and their square symmetries
//! - Tiles with border signatures
//! - Snake-order traversal and completed assemblies

/// Boolean pixel grids
pub mod bitmap;
/// Snake-order traversal and completed assemblies
pub mod grid;
/// Reflections, rotations and the orientation group
pub mod symmetry;
/// Tiles and border signatures
pub mod tiles;

pub use bitmap::Bitmap;
pub use grid::Assembly;
pub use symmetry::{Orientation, Symmetric};
pub use tiles::{Border, Side, Tile};
