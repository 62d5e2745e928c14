//! Symmetries of the square
//!
//! Every square grid in the crate (raw arrays, bitmaps, tiles) can be mirrored
//! and rotated. The [`Symmetric`] trait captures the three generating
//! transforms; the 8 elements of the group are enumerated by [`Orientation`].

use ndarray::{Array2, Axis};
use std::fmt;

/// Number of symmetries of a square (4 rotations × 2 reflections)
pub const ORIENTATION_COUNT: usize = 8;

/// One of the 8 symmetries of a square
///
/// Applied as reflections first, then clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Mirror rows so the top edge becomes the bottom edge
    pub flip_x: bool,
    /// Mirror columns so the left edge becomes the right edge
    pub flip_y: bool,
    /// Clockwise quarter turns applied after any reflection
    pub quarter_turns: u8,
}

impl Orientation {
    /// The identity transform
    pub const IDENTITY: Self = Self::nth(0);

    /// Every symmetry, reflections outermost and rotations innermost
    pub const ALL: [Self; ORIENTATION_COUNT] = [
        Self::nth(0),
        Self::nth(1),
        Self::nth(2),
        Self::nth(3),
        Self::nth(4),
        Self::nth(5),
        Self::nth(6),
        Self::nth(7),
    ];

    const fn nth(index: usize) -> Self {
        let reflection = index / 4;
        Self {
            flip_x: reflection == 1 || reflection == 3,
            flip_y: reflection >= 2,
            quarter_turns: (index % 4) as u8,
        }
    }

    /// Position of this orientation in [`Orientation::ALL`]
    pub const fn index(self) -> usize {
        let reflection = match (self.flip_x, self.flip_y) {
            (false, false) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (true, true) => 3,
        };
        reflection * 4 + (self.quarter_turns % 4) as usize
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reflection = match (self.flip_x, self.flip_y) {
            (false, false) => "unflipped",
            (true, false) => "flip-x",
            (false, true) => "flip-y",
            (true, true) => "flip-xy",
        };
        write!(f, "{reflection}, {}°", u32::from(self.quarter_turns % 4) * 90)
    }
}

/// A square value that can be reflected and rotated
///
/// Implementors return new values; the receiver is never mutated.
pub trait Symmetric: Clone {
    /// Mirror rows (upside down)
    #[must_use]
    fn flipped_x(&self) -> Self;

    /// Mirror columns (left to right)
    #[must_use]
    fn flipped_y(&self) -> Self;

    /// Rotate a quarter turn clockwise
    #[must_use]
    fn rotated_clockwise(&self) -> Self;

    /// Apply a complete orientation
    #[must_use]
    fn oriented(&self, orientation: Orientation) -> Self {
        let mut result = self.clone();
        if orientation.flip_x {
            result = result.flipped_x();
        }
        if orientation.flip_y {
            result = result.flipped_y();
        }
        for _ in 0..orientation.quarter_turns % 4 {
            result = result.rotated_clockwise();
        }
        result
    }

    /// All 8 orientations in [`Orientation::ALL`] order
    fn orientations(&self) -> Vec<Self> {
        Orientation::ALL
            .iter()
            .map(|&orientation| self.oriented(orientation))
            .collect()
    }
}

impl<T: Clone> Symmetric for Array2<T> {
    fn flipped_x(&self) -> Self {
        let mut view = self.view();
        view.invert_axis(Axis(0));
        view.to_owned()
    }

    fn flipped_y(&self) -> Self {
        let mut view = self.view();
        view.invert_axis(Axis(1));
        view.to_owned()
    }

    fn rotated_clockwise(&self) -> Self {
        // rotated[r][c] = original[n - 1 - c][r]
        let mut view = self.t();
        view.invert_axis(Axis(1));
        view.to_owned()
    }
}
