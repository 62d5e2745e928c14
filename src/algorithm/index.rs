//! Border index over every orientation of every tile
//!
//! Each tile is expanded into its 8 orientations ("variants"). Variant `v`
//! belongs to the tile in slot `v / 8`, and `v % 8` is the position of its
//! orientation in [`Orientation::ALL`]. For every variant, each of the four
//! border signatures is registered under its side, so the assembler can ask
//! "which variants show this signature on their left edge?" in one lookup.

use crate::spatial::symmetry::{ORIENTATION_COUNT, Orientation, Symmetric};
use crate::spatial::tiles::{Border, Side, Tile};
use std::collections::HashMap;

/// Multi-map from (side, border signature) to tile variants
#[derive(Clone, Debug)]
pub struct BorderIndex {
    variants: Vec<Tile>,
    by_side: [HashMap<Border, Vec<usize>>; 4],
}

impl BorderIndex {
    /// Register all orientations of all tiles
    ///
    /// A tile's own alternate orientations are included; excluding them is
    /// left to the caller.
    pub fn build(tiles: &[Tile]) -> Self {
        let variants: Vec<Tile> = tiles.iter().flat_map(Tile::orientations).collect();

        let mut by_side: [HashMap<Border, Vec<usize>>; 4] =
            std::array::from_fn(|_| HashMap::new());
        for (variant, tile) in variants.iter().enumerate() {
            for (side_map, border) in by_side.iter_mut().zip(tile.borders()) {
                side_map.entry(border.clone()).or_default().push(variant);
            }
        }

        Self { variants, by_side }
    }

    /// Slot of the tile a variant was generated from
    pub const fn slot_of(variant: usize) -> usize {
        variant / ORIENTATION_COUNT
    }

    /// Orientation that produced a variant from its base tile
    pub const fn orientation_of(variant: usize) -> Orientation {
        let [o0, o1, o2, o3, o4, o5, o6, o7] = Orientation::ALL;
        match variant % ORIENTATION_COUNT {
            0 => o0,
            1 => o1,
            2 => o2,
            3 => o3,
            4 => o4,
            5 => o5,
            6 => o6,
            _ => o7,
        }
    }

    /// Every variant, grouped by slot
    pub fn variants(&self) -> &[Tile] {
        &self.variants
    }

    /// Look up a single variant
    pub fn variant(&self, variant: usize) -> Option<&Tile> {
        self.variants.get(variant)
    }

    /// Number of base tiles indexed
    pub fn tile_count(&self) -> usize {
        self.variants.len() / ORIENTATION_COUNT
    }

    /// Variants presenting `border` on `side`
    pub fn candidates(&self, side: Side, border: &Border) -> &[usize] {
        self.by_side
            .get(side.index())
            .and_then(|side_map| side_map.get(border))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
