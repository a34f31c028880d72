//! Tile module - a numbered tile and its animated position

use crate::config::Geometry;

/// Board-unique tile identity
///
/// Ids survive moves and merges (the absorbing tile keeps its id), which is
/// what lets a slide remember which tiles already merged.
pub type TileId = u32;

/// A single numbered tile
///
/// `row`/`col` is the discrete cell the tile is keyed under. `x`/`y` is its
/// continuous position in sub-cell units; at rest it equals
/// `(col * cell_width, row * cell_height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub row: u8,
    pub col: u8,
    pub x: i32,
    pub y: i32,
}

impl Tile {
    /// Create a tile resting at `(row, col)`
    pub fn new(id: TileId, value: u32, row: u8, col: u8, geometry: &Geometry) -> Self {
        debug_assert!(is_tile_value(value), "tile value {value} is not a power of two >= 2");
        let (x, y) = geometry.rest_position(row, col);
        Self {
            id,
            value,
            row,
            col,
            x,
            y,
        }
    }

    /// True when the continuous position matches the discrete cell
    pub fn is_at_rest(&self, geometry: &Geometry) -> bool {
        geometry.rest_position(self.row, self.col) == (self.x, self.y)
    }

    /// Move the continuous position back onto the discrete cell
    pub fn snap(&mut self, geometry: &Geometry) {
        let (x, y) = geometry.rest_position(self.row, self.col);
        self.x = x;
        self.y = y;
    }
}

/// Valid tile values are powers of two, at least 2
#[inline]
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}
