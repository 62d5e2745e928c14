//! Boolean pixel grids used for tile contents and the stitched image

use crate::spatial::symmetry::Symmetric;
use ndarray::Array2;
use std::fmt;

/// A rectangular grid of set (`#`) and unset (`.`) pixels
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitmap {
    pixels: Array2<bool>,
}

impl Bitmap {
    /// Wrap an existing pixel array
    pub const fn new(pixels: Array2<bool>) -> Self {
        Self { pixels }
    }

    /// Create a square bitmap with every pixel unset
    pub fn blank(size: usize) -> Self {
        Self::new(Array2::from_elem((size, size), false))
    }

    /// Build a bitmap from a per-pixel function of `(row, col)`
    pub fn from_fn<F>(rows: usize, cols: usize, mut pixel: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        Self::new(Array2::from_shape_fn((rows, cols), |(row, col)| {
            pixel(row, col)
        }))
    }

    /// Parse `#`/`.` rows; any character other than `#` is unset
    ///
    /// Rows shorter than the longest row are padded with unset pixels.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        Self::from_fn(rows.len(), width, |row, col| {
            rows.get(row)
                .and_then(|text| text.chars().nth(col))
                .is_some_and(|c| c == '#')
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Side length, assuming the bitmap is square
    pub fn size(&self) -> usize {
        self.rows()
    }

    /// Pixel value; out-of-range coordinates read as unset
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.pixels.get((row, col)).copied().unwrap_or(false)
    }

    /// Number of set pixels
    pub fn set_count(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }

    /// Copy with the outermost ring of pixels removed
    #[must_use]
    pub fn interior(&self) -> Self {
        let rows = self.rows().saturating_sub(2);
        let cols = self.cols().saturating_sub(2);
        Self::from_fn(rows, cols, |row, col| self.get(row + 1, col + 1))
    }

    /// Underlying pixel array
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }
}

impl Symmetric for Bitmap {
    fn flipped_x(&self) -> Self {
        Self::new(self.pixels.flipped_x())
    }

    fn flipped_y(&self) -> Self {
        Self::new(self.pixels.flipped_y())
    }

    fn rotated_clockwise(&self) -> Self {
        Self::new(self.pixels.rotated_clockwise())
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            let line: String = row
                .iter()
                .map(|&pixel| if pixel { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
