//! Puzzle text parsing
//!
//! Input is a sequence of blocks, each a `Tile <id>:` header followed by the
//! tile's pixel rows of `#` and `.`. Blocks are separated by blank lines.

use crate::io::configuration::TILE_HEADER_PREFIX;
use crate::io::error::{Result, invalid_input};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::Tile;
use ndarray::Array2;
use std::collections::HashSet;

struct PendingTile {
    id: u64,
    header_line: usize,
    rows: Vec<Vec<bool>>,
}

impl PendingTile {
    fn finish(self) -> Result<Tile> {
        let size = self.rows.len();
        if size == 0 {
            return Err(invalid_input(
                self.header_line,
                &format!("tile {} has no pixel rows", self.id),
            ));
        }

        let width = self.rows.first().map_or(0, Vec::len);
        if width != size {
            return Err(invalid_input(
                self.header_line,
                &format!("tile {} has {size} rows of {width} pixels", self.id),
            ));
        }

        let pixels = Array2::from_shape_vec((size, size), self.rows.concat())
            .map_err(|e| invalid_input(self.header_line, &e))?;
        Ok(Tile::new(self.id, Bitmap::new(pixels)))
    }
}

/// Parse every tile in the puzzle text
///
/// # Errors
///
/// Returns an error if:
/// - A header lacks the trailing `:` or a numeric id
/// - A tile id is repeated
/// - A pixel row appears before any header or contains characters other than `#`/`.`
/// - A row's length differs from the first row of its tile
/// - A tile is not square
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut pending: Option<PendingTile> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end();

        if line.is_empty() {
            if let Some(tile) = pending.take() {
                tiles.push(tile.finish()?);
            }
            continue;
        }

        if let Some(header) = line.strip_prefix(TILE_HEADER_PREFIX) {
            if let Some(tile) = pending.take() {
                tiles.push(tile.finish()?);
            }
            let id = parse_header(header, line_number)?;
            if !seen_ids.insert(id) {
                return Err(invalid_input(line_number, &format!("tile id {id} is repeated")));
            }
            pending = Some(PendingTile {
                id,
                header_line: line_number,
                rows: Vec::new(),
            });
            continue;
        }

        let Some(tile) = pending.as_mut() else {
            return Err(invalid_input(line_number, &"pixel row outside of a tile"));
        };
        let row = parse_row(line, line_number)?;
        if let Some(first) = tile.rows.first()
            && first.len() != row.len()
        {
            return Err(invalid_input(
                line_number,
                &format!("row has {} pixels, expected {}", row.len(), first.len()),
            ));
        }
        tile.rows.push(row);
    }

    if let Some(tile) = pending {
        tiles.push(tile.finish()?);
    }

    Ok(tiles)
}

fn parse_header(header: &str, line_number: usize) -> Result<u64> {
    let id_text = header
        .strip_suffix(':')
        .ok_or_else(|| invalid_input(line_number, &"tile header must end with ':'"))?
        .trim();
    id_text.parse::<u64>().map_err(|e| {
        invalid_input(line_number, &format!("invalid tile id '{id_text}': {e}"))
    })
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .map(|c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            other => Err(invalid_input(
                line_number,
                &format!("unexpected character '{other}' in pixel row"),
            )),
        })
        .collect()
}
