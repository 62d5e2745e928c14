//! Jigsaw tiles and their border signatures
//!
//! A tile is a square bitmap with an id. Its four outermost rows/columns are
//! kept as border signatures so that neighbour checks compare bit vectors
//! instead of walking pixels. Reflections and rotations move and reverse the
//! stored signatures in step with the pixels, so a transformed tile always
//! carries the borders it would have if they were read from scratch.

use crate::spatial::bitmap::Bitmap;
use crate::spatial::symmetry::Symmetric;
use bitvec::prelude::*;
use std::fmt;

/// Edge of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row, read left to right
    Top,
    /// Last column, read top to bottom
    Right,
    /// Last row, read left to right
    Bottom,
    /// First column, read top to bottom
    Left,
}

impl Side {
    /// All sides in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side that touches this one when two tiles are adjacent
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Position in [`Side::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Grid offset `(rows, cols)` of the neighbour across this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// Side facing a neighbour at the given grid offset, if it is orthogonal
    pub const fn facing(rows: isize, cols: isize) -> Option<Self> {
        match (rows, cols) {
            (-1, 0) => Some(Self::Top),
            (0, 1) => Some(Self::Right),
            (1, 0) => Some(Self::Bottom),
            (0, -1) => Some(Self::Left),
            _ => None,
        }
    }
}

/// Ordered pixel sequence along one tile edge
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Border {
    bits: BitVec,
}

impl Border {
    /// Read a border from pixels in edge order
    pub fn from_pixels<I: IntoIterator<Item = bool>>(pixels: I) -> Self {
        Self {
            bits: pixels.into_iter().collect(),
        }
    }

    /// Same pixels read from the other end
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.reverse();
        Self { bits }
    }

    /// Number of pixels along the edge
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the border of an empty tile
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pixels in edge order
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .pixels()
            .map(|pixel| if pixel { '#' } else { '.' })
            .collect();
        write!(f, "{text}")
    }
}

/// A square jigsaw tile in one particular orientation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: u64,
    pixels: Bitmap,
    borders: [Border; 4],
}

impl Tile {
    /// Create a tile, reading its borders from the pixels
    pub fn new(id: u64, pixels: Bitmap) -> Self {
        let borders = read_borders(&pixels);
        Self {
            id,
            pixels,
            borders,
        }
    }

    /// Puzzle id from the tile header
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Full pixel grid, borders included
    pub const fn pixels(&self) -> &Bitmap {
        &self.pixels
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.pixels.size()
    }

    /// Border signatures in [`Side::ALL`] order
    pub const fn borders(&self) -> &[Border; 4] {
        &self.borders
    }

    /// Border signature on one side
    pub const fn border(&self, side: Side) -> &Border {
        let [top, right, bottom, left] = &self.borders;
        match side {
            Side::Top => top,
            Side::Right => right,
            Side::Bottom => bottom,
            Side::Left => left,
        }
    }

    /// Whether `neighbour` can sit across `side` of this tile
    pub fn fits(&self, side: Side, neighbour: &Self) -> bool {
        self.border(side) == neighbour.border(side.opposite())
    }

    /// Pixels with the border ring stripped
    pub fn interior(&self) -> Bitmap {
        self.pixels.interior()
    }
}

impl Symmetric for Tile {
    fn flipped_x(&self) -> Self {
        let [top, right, bottom, left] = &self.borders;
        Self {
            id: self.id,
            pixels: self.pixels.flipped_x(),
            borders: [
                bottom.clone(),
                right.reversed(),
                top.clone(),
                left.reversed(),
            ],
        }
    }

    fn flipped_y(&self) -> Self {
        let [top, right, bottom, left] = &self.borders;
        Self {
            id: self.id,
            pixels: self.pixels.flipped_y(),
            borders: [
                top.reversed(),
                left.clone(),
                bottom.reversed(),
                right.clone(),
            ],
        }
    }

    fn rotated_clockwise(&self) -> Self {
        let [top, right, bottom, left] = &self.borders;
        Self {
            id: self.id,
            pixels: self.pixels.rotated_clockwise(),
            borders: [
                left.reversed(),
                top.clone(),
                right.reversed(),
                bottom.clone(),
            ],
        }
    }
}

fn read_borders(pixels: &Bitmap) -> [Border; 4] {
    let size = pixels.size();
    let last = size.saturating_sub(1);
    [
        Border::from_pixels((0..size).map(|col| pixels.get(0, col))),
        Border::from_pixels((0..size).map(|row| pixels.get(row, last))),
        Border::from_pixels((0..size).map(|col| pixels.get(last, col))),
        Border::from_pixels((0..size).map(|row| pixels.get(row, 0))),
    ]
}
