//! Grid traversal and completed jigsaw assemblies
//!
//! The assembler fills cells in snake order: row-major with every odd row
//! walked right to left, so each new cell touches the one filled just before
//! it. A finished placement becomes an [`Assembly`], which owns the oriented
//! tiles and stitches their interiors into the composite image.

use crate::io::error::{PuzzleError, Result};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::{Side, Tile};
use ndarray::Array2;

/// Grid coordinate `(row, col)` of the `position`-th cell in snake order
pub const fn snake_position(position: usize, side: usize) -> (usize, usize) {
    if side == 0 {
        return (0, 0);
    }
    let row = position / side;
    let col = position % side;
    if row % 2 == 1 {
        (row, side - 1 - col)
    } else {
        (row, col)
    }
}

/// A complete, edge-consistent placement of every tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly {
    side: usize,
    tiles: Vec<Tile>,
}

impl Assembly {
    /// Build an assembly from oriented tiles in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count is not `side * side` or if any two
    /// orthogonally adjacent tiles disagree on their shared edge
    pub fn new(side: usize, tiles: Vec<Tile>) -> Result<Self> {
        if tiles.len() != side * side {
            return Err(PuzzleError::InvalidTileSet {
                reason: format!(
                    "a {side}x{side} assembly needs {} tiles, got {}",
                    side * side,
                    tiles.len()
                ),
            });
        }

        let assembly = Self { side, tiles };
        if let Some((row, col, edge)) = assembly.first_mismatch() {
            return Err(PuzzleError::InvalidTileSet {
                reason: format!("tile at ({row}, {col}) does not match its {edge:?} neighbour"),
            });
        }
        Ok(assembly)
    }

    /// Number of tiles along each edge of the puzzle
    pub const fn side(&self) -> usize {
        self.side
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a grid coordinate
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.tiles.get(row * self.side + col)
    }

    /// Tile ids laid out by grid position
    pub fn id_layout(&self) -> Array2<u64> {
        Array2::from_shape_fn((self.side, self.side), |(row, col)| {
            self.tile(row, col).map_or(0, Tile::id)
        })
    }

    /// Ids of the corner tiles: top-left, top-right, bottom-left, bottom-right
    pub fn corner_ids(&self) -> [u64; 4] {
        let last = self.side.saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
            .map(|(row, col)| self.tile(row, col).map_or(0, Tile::id))
    }

    /// Product of the corner tile ids
    ///
    /// Each diagonal contributes its two end tiles, counted once when they
    /// coincide, so a single-tile puzzle yields the id squared.
    ///
    /// # Errors
    ///
    /// Returns `ProductOverflow` if the product does not fit in a `u64`
    pub fn corner_product(&self) -> Result<u64> {
        let ids = self.corner_ids();
        let [top_left, top_right, bottom_left, bottom_right] = ids;
        let diagonal = |a: u64, b: u64| if self.side == 1 { Some(a) } else { a.checked_mul(b) };
        diagonal(top_left, bottom_right)
            .zip(diagonal(top_right, bottom_left))
            .and_then(|(first, second)| first.checked_mul(second))
            .ok_or(PuzzleError::ProductOverflow { ids })
    }

    /// Stitch the border-stripped tile interiors into one square image
    pub fn composite(&self) -> Bitmap {
        let interiors: Vec<Bitmap> = self.tiles.iter().map(Tile::interior).collect();
        let span = interiors.first().map_or(0, Bitmap::size);
        if span == 0 {
            return Bitmap::blank(0);
        }

        let size = self.side * span;
        Bitmap::from_fn(size, size, |row, col| {
            interiors
                .get((row / span) * self.side + col / span)
                .is_some_and(|interior| interior.get(row % span, col % span))
        })
    }

    /// True when every pair of adjacent tiles shares matching borders
    pub fn is_consistent(&self) -> bool {
        self.first_mismatch().is_none()
    }

    // Only right and bottom neighbours are checked; that covers every pair once
    fn first_mismatch(&self) -> Option<(usize, usize, Side)> {
        for row in 0..self.side {
            for col in 0..self.side {
                let tile = self.tile(row, col)?;
                if let Some(right) = self.tile(row, col + 1)
                    && !tile.fits(Side::Right, right)
                {
                    return Some((row, col, Side::Right));
                }
                if let Some(below) = self.tile(row + 1, col)
                    && !tile.fits(Side::Bottom, below)
                {
                    return Some((row, col, Side::Bottom));
                }
            }
        }
        None
    }
}
