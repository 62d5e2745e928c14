//! Pattern search over the composite image and roughness scoring
//!
//! A pattern is a sparse set of cells that must all be set for a match; any
//! other pixel under the pattern's bounding box is unconstrained. The image
//! is tried in each of its 8 orientations and scanning stops at the first
//! orientation that contains at least one match.

use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::symmetry::{Orientation, Symmetric};
use ndarray::Array2;

/// Sparse pixel mask anchored at the top-left of its bounding box
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Parse ASCII art where `#` marks a required cell
    ///
    /// The pattern is cropped to the bounding box of its `#` cells, so
    /// surrounding blank lines and margins do not matter.
    ///
    /// # Errors
    ///
    /// Returns an error if the art contains no `#` cells
    pub fn from_art(art: &str) -> Result<Self> {
        let pattern = Self::from_cells(
            art.lines()
                .enumerate()
                .flat_map(|(row, line)| {
                    line.chars()
                        .enumerate()
                        .filter(|&(_, c)| c == '#')
                        .map(move |(col, _)| (row, col))
                })
                .collect(),
        );
        if pattern.cells.is_empty() {
            return Err(PuzzleError::InvalidPattern {
                reason: "pattern art has no '#' cells".to_string(),
            });
        }
        Ok(pattern)
    }

    /// The 3×20 sea monster with 15 cells
    pub fn sea_monster() -> Self {
        Self::from_art(SEA_MONSTER).unwrap_or_else(|_| Self::from_cells(Vec::new()))
    }

    fn from_cells(cells: Vec<(usize, usize)>) -> Self {
        let top = cells.iter().map(|&(row, _)| row).min().unwrap_or(0);
        let left = cells.iter().map(|&(_, col)| col).min().unwrap_or(0);
        let cells: Vec<(usize, usize)> = cells
            .into_iter()
            .map(|(row, col)| (row - top, col - left))
            .collect();
        let height = cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        Self {
            cells,
            height,
            width,
        }
    }

    /// Required cells as `(row, col)` offsets from the anchor
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Number of required cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Rows spanned by the pattern
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the pattern
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether every required cell is set with the pattern anchored at `(row, col)`
    ///
    /// Anchors where the pattern would run off the image never match.
    pub fn matches_at(&self, image: &Bitmap, row: usize, col: usize) -> bool {
        row + self.height <= image.rows()
            && col + self.width <= image.cols()
            && self
                .cells
                .iter()
                .all(|&(d_row, d_col)| image.get(row + d_row, col + d_col))
    }

    /// All anchors in row-major order where the pattern matches
    pub fn find_matches(&self, image: &Bitmap) -> Vec<(usize, usize)> {
        if self.cells.is_empty() {
            return Vec::new();
        }
        let rows = (image.rows() + 1).saturating_sub(self.height);
        let cols = (image.cols() + 1).saturating_sub(self.width);
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&(row, col)| self.matches_at(image, row, col))
            .collect()
    }
}

/// Outcome of scanning an image for a pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanReport {
    /// Orientation of the image in which matches were found
    pub orientation: Option<Orientation>,
    /// The image in that orientation (unchanged when nothing matched)
    pub image: Bitmap,
    /// Match anchors within the oriented image
    pub matches: Vec<(usize, usize)>,
    /// Pixels of the oriented image covered by at least one match
    pub covered: Bitmap,
    /// Set pixels minus `cell_count` per match
    pub roughness: usize,
}

impl ScanReport {
    /// Number of pattern instances found
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Search every orientation of `image` for `pattern` and score roughness
///
/// Overlapping matches are each charged the full cell count.
pub fn scan(image: &Bitmap, pattern: &Pattern) -> ScanReport {
    let set_pixels = image.set_count();

    for orientation in Orientation::ALL {
        let oriented = image.oriented(orientation);
        let matches = pattern.find_matches(&oriented);
        if matches.is_empty() {
            continue;
        }

        let covered = coverage(&oriented, pattern, &matches);
        let roughness = set_pixels.saturating_sub(pattern.cell_count() * matches.len());
        return ScanReport {
            orientation: Some(orientation),
            image: oriented,
            matches,
            covered,
            roughness,
        };
    }

    ScanReport {
        orientation: None,
        image: image.clone(),
        matches: Vec::new(),
        covered: Bitmap::new(Array2::from_elem((image.rows(), image.cols()), false)),
        roughness: set_pixels,
    }
}

fn coverage(image: &Bitmap, pattern: &Pattern, matches: &[(usize, usize)]) -> Bitmap {
    let mut covered = Array2::from_elem((image.rows(), image.cols()), false);
    for &(row, col) in matches {
        for &(d_row, d_col) in pattern.cells() {
            if let Some(pixel) = covered.get_mut((row + d_row, col + d_col)) {
                *pixel = true;
            }
        }
    }
    Bitmap::new(covered)
}
