//! Backtracking jigsaw assembler
//!
//! The search fills an N×N grid in snake order. Every cell after the anchor
//! touches the cell filled just before it, so the border index narrows the
//! candidates to variants whose facing edge matches that neighbour. Each
//! candidate is then checked against every other placed neighbour before it
//! is committed; a dead end undoes the placement and moves on to the next
//! candidate.

use crate::algorithm::bitset::SlotSet;
use crate::algorithm::index::BorderIndex;
use crate::io::configuration::MIN_TILE_SIZE;
use crate::io::error::{PuzzleError, Result, invalid_tile_set};
use crate::spatial::grid::{Assembly, snake_position};
use crate::spatial::tiles::{Side, Tile};
use ndarray::Array2;
use std::collections::HashSet;

/// Search state for assembling one tile set
pub struct Assembler {
    index: BorderIndex,
    side: usize,
    cells: Array2<Option<usize>>,
    used: SlotSet,
}

impl Assembler {
    /// Validate the tile set and index every orientation of every tile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tiles are given
    /// - The tile count is not a perfect square
    /// - Tiles differ in size, are smaller than the minimum size, or share an id
    pub fn new(tiles: &[Tile]) -> Result<Self> {
        let side = validate_tile_set(tiles)?;
        Ok(Self {
            index: BorderIndex::build(tiles),
            side,
            cells: Array2::from_elem((side, side), None),
            used: SlotSet::new(tiles.len()),
        })
    }

    /// Number of tiles along each edge of the finished puzzle
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of distinct anchors (every orientation of every tile)
    pub fn anchor_count(&self) -> usize {
        self.index.variants().len()
    }

    /// The border index backing the search
    pub const fn index(&self) -> &BorderIndex {
        &self.index
    }

    /// Run the search with one variant fixed in the top-left cell
    ///
    /// Returns `Ok(None)` when no complete assembly extends this anchor. The
    /// search state is reset on entry, so anchors can be tried in any order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSet` if a finished search leaves an empty cell or
    /// a placement that fails assembly validation
    pub fn try_anchor(&mut self, anchor: usize) -> Result<Option<Assembly>> {
        self.reset();
        if anchor >= self.anchor_count() {
            return Ok(None);
        }

        self.place(0, 0, anchor);
        if self.extend(1) {
            self.completed().map(Some)
        } else {
            self.reset();
            Ok(None)
        }
    }

    /// Try every anchor in order and return the first complete assembly
    ///
    /// # Errors
    ///
    /// Returns `NoTiling` if no anchor leads to a complete assembly, or the
    /// first validation error raised by [`Assembler::try_anchor`]
    pub fn solve(&mut self) -> Result<Assembly> {
        self.solve_with(|_, _| {})
    }

    /// Like [`Assembler::solve`], reporting each anchor once it has been tried
    ///
    /// `on_anchor` receives the anchor and whether it produced an assembly.
    ///
    /// # Errors
    ///
    /// Same as [`Assembler::solve`]
    pub fn solve_with<F>(&mut self, mut on_anchor: F) -> Result<Assembly>
    where
        F: FnMut(usize, bool),
    {
        for anchor in 0..self.anchor_count() {
            let found = self.try_anchor(anchor)?;
            on_anchor(anchor, found.is_some());
            if let Some(assembly) = found {
                return Ok(assembly);
            }
        }
        Err(PuzzleError::NoTiling {
            tile_count: self.index.tile_count(),
        })
    }

    fn extend(&mut self, position: usize) -> bool {
        if position >= self.side * self.side {
            return true;
        }
        let Some(previous_position) = position.checked_sub(1) else {
            return false;
        };

        let (row, col) = snake_position(position, self.side);
        let (previous_row, previous_col) = snake_position(previous_position, self.side);
        let Some(side) = Side::facing(
            row as isize - previous_row as isize,
            col as isize - previous_col as isize,
        ) else {
            return false;
        };
        let Some(previous) = self.placed(previous_row, previous_col) else {
            return false;
        };

        // Cloned so the grid can be mutated while walking the candidates
        let candidates = self
            .index
            .candidates(side.opposite(), previous.border(side))
            .to_vec();

        for variant in candidates {
            if self.used.contains(BorderIndex::slot_of(variant)) {
                continue;
            }
            let fits = self
                .index
                .variant(variant)
                .is_some_and(|tile| self.fits_placed_neighbours(tile, row, col));
            if !fits {
                continue;
            }

            self.place(row, col, variant);
            if self.extend(position + 1) {
                return true;
            }
            self.unplace(row, col, variant);
        }

        false
    }

    fn fits_placed_neighbours(&self, tile: &Tile, row: usize, col: usize) -> bool {
        Side::ALL.iter().all(|&side| {
            let (rows, cols) = side.offset();
            let neighbour = row
                .checked_add_signed(rows)
                .zip(col.checked_add_signed(cols))
                .and_then(|(r, c)| self.placed(r, c));
            neighbour.is_none_or(|neighbour| tile.fits(side, neighbour))
        })
    }

    fn placed(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells
            .get((row, col))
            .copied()
            .flatten()
            .and_then(|variant| self.index.variant(variant))
    }

    fn place(&mut self, row: usize, col: usize, variant: usize) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = Some(variant);
            self.used.insert(BorderIndex::slot_of(variant));
        }
    }

    fn unplace(&mut self, row: usize, col: usize, variant: usize) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = None;
            self.used.remove(BorderIndex::slot_of(variant));
        }
    }

    fn reset(&mut self) {
        self.cells.fill(None);
        self.used.clear();
    }

    fn completed(&self) -> Result<Assembly> {
        let mut tiles = Vec::with_capacity(self.side * self.side);
        for row in 0..self.side {
            for col in 0..self.side {
                let tile = self.placed(row, col).ok_or_else(|| {
                    invalid_tile_set(&format!("cell ({row}, {col}) is empty after a full search"))
                })?;
                tiles.push(tile.clone());
            }
        }
        Assembly::new(self.side, tiles)
    }
}

/// Assemble a tile set, trying anchors until one succeeds
///
/// # Errors
///
/// Returns an error if the tile set is invalid or no assembly exists
pub fn assemble(tiles: &[Tile]) -> Result<Assembly> {
    Assembler::new(tiles)?.solve()
}

// Returns the grid side length
fn validate_tile_set(tiles: &[Tile]) -> Result<usize> {
    let Some(first) = tiles.first() else {
        return Err(invalid_tile_set(&"no tiles to assemble"));
    };

    let side = tiles.len().isqrt();
    if side * side != tiles.len() {
        return Err(invalid_tile_set(&format!(
            "{} tiles cannot form a square grid",
            tiles.len()
        )));
    }

    let size = first.size();
    if size < MIN_TILE_SIZE {
        return Err(invalid_tile_set(&format!(
            "tiles must be at least {MIN_TILE_SIZE} pixels wide, got {size}"
        )));
    }

    let mut ids = HashSet::with_capacity(tiles.len());
    for tile in tiles {
        if tile.size() != size || tile.pixels().cols() != size {
            return Err(invalid_tile_set(&format!(
                "tile {} is {}x{} but tiles are {size}x{size}",
                tile.id(),
                tile.pixels().rows(),
                tile.pixels().cols()
            )));
        }
        if !ids.insert(tile.id()) {
            return Err(invalid_tile_set(&format!("tile id {} is repeated", tile.id())));
        }
    }

    Ok(side)
}
