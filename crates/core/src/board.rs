//! Board module - coordinate-keyed tile storage
//!
//! The board is a 4x4 grid where each cell is either empty or holds one tile.
//! Uses a flat array (`row * COLS + col`) for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom) and col ranges
//! 0..3 (left to right).
//!
//! The board holds no move or merge logic; see [`crate::resolver`].

use arrayvec::ArrayVec;

use crate::config::Geometry;
use crate::tile::{Tile, TileId};
use crate::types::{CELL_COUNT, COLS, ROWS};

/// The game board - `ROWS` x `COLS` cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Option<Tile>; CELL_COUNT],
    len: usize,
    next_id: TileId,
    geometry: Geometry,
}

impl Board {
    /// Create a new empty board
    pub fn new(geometry: Geometry) -> Self {
        Self {
            cells: [None; CELL_COUNT],
            len: 0,
            next_id: 0,
            geometry,
        }
    }

    /// Build a board from a value grid (0 = empty)
    ///
    /// Non-zero entries must be tile values (checked in debug builds).
    pub fn from_values(geometry: Geometry, grid: [[u32; COLS as usize]; ROWS as usize]) -> Self {
        let mut board = Self::new(geometry);
        for (row, line) in grid.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.insert_new(row as u8, col as u8, value);
                }
            }
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        Some(row as usize * COLS as usize + col as usize)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Tile at (row, col); `None` if empty or out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<&Tile> {
        Self::index(row, col).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Place `tile` at (row, col), replacing whatever was there
    ///
    /// The tile is re-keyed to (row, col), snapped to rest and given a fresh
    /// id, so a copied tile never shares identity with the one it came from.
    /// Returns the new id, or `None` if out of bounds.
    pub fn set(&mut self, row: u8, col: u8, mut tile: Tile) -> Option<TileId> {
        let idx = Self::index(row, col)?;
        tile.id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        tile.row = row;
        tile.col = col;
        tile.snap(&self.geometry);
        if self.cells[idx].replace(tile).is_none() {
            self.len += 1;
        }
        Some(tile.id)
    }

    /// Create a fresh tile at (row, col)
    ///
    /// Returns the new tile id, or `None` if out of bounds.
    pub fn insert_new(&mut self, row: u8, col: u8, value: u32) -> Option<TileId> {
        let tile = Tile::new(self.next_id, value, row, col, &self.geometry);
        self.set(row, col, tile)
    }

    /// Remove and return the tile at (row, col)
    pub fn remove(&mut self, row: u8, col: u8) -> Option<Tile> {
        let idx = Self::index(row, col)?;
        let tile = self.cells[idx].take();
        if tile.is_some() {
            self.len -= 1;
        }
        tile
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every cell is occupied
    pub fn is_full(&self) -> bool {
        self.len == CELL_COUNT
    }

    /// Check if position is inside the grid
    pub fn in_bounds(row: i16, col: i16) -> bool {
        (0..ROWS as i16).contains(&row) && (0..COLS as i16).contains(&col)
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.len = 0;
    }

    /// Live tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                out.push(((idx / COLS as usize) as u8, (idx % COLS as usize) as u8));
            }
        }
        out
    }

    /// Value grid, 0 for empty cells
    pub fn values(&self) -> [[u32; COLS as usize]; ROWS as usize] {
        let mut grid = [[0u32; COLS as usize]; ROWS as usize];
        for tile in self.tiles() {
            grid[tile.row as usize][tile.col as usize] = tile.value;
        }
        grid
    }

    /// Sum of all tile values
    pub fn total(&self) -> u64 {
        self.tiles().map(|t| t.value as u64).sum()
    }

    /// Largest tile value, 0 on an empty board
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Replace the whole mapping with `tiles`, keyed by each tile's own row/col
    ///
    /// Used by the resolver to commit a tick. Positions are kept as-is (tiles
    /// may be mid-flight). Out-of-bounds tiles and duplicate keys are invariant
    /// violations.
    pub(crate) fn rebuild<'a>(&mut self, tiles: impl IntoIterator<Item = &'a Tile>) {
        self.clear();
        for tile in tiles {
            let idx = Self::index(tile.row, tile.col);
            debug_assert!(idx.is_some(), "tile {} keyed out of bounds", tile.id);
            if let Some(idx) = idx {
                debug_assert!(
                    self.cells[idx].is_none(),
                    "two tiles keyed at ({}, {})",
                    tile.row,
                    tile.col
                );
                if self.cells[idx].replace(*tile).is_none() {
                    self.len += 1;
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Geometry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_set_rekeys_and_snaps() {
        let mut board = Board::default();
        let g = *board.geometry();
        let mut tile = Tile::new(5, 4, 0, 0, &g);
        tile.x = 333;

        let id = board.set(2, 1, tile).unwrap();
        let stored = board.get(2, 1).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!((stored.row, stored.col), (2, 1));
        assert_eq!((stored.x, stored.y), (200, 400));
        assert_eq!(board.len(), 1);

        // Overwriting keeps the count.
        assert!(board.set(2, 1, Tile::new(6, 8, 0, 0, &g)).is_some());
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(2, 1).unwrap().value, 8);
        assert_eq!(board.set(4, 0, tile), None);
    }

    #[test]
    fn test_set_never_duplicates_ids() {
        let mut board = Board::from_values(Geometry::default(), [[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let copy = *board.get(0, 0).unwrap();
        board.set(0, 1, copy);
        board.set(0, 2, copy);

        let mut ids: Vec<TileId> = board.tiles().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(board.insert_new(1, 0, 2), Some(3));
    }

    #[test]
    fn test_rebuild_replaces_mapping() {
        let mut board = Board::from_values(
            Geometry::default(),
            [[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]],
        );
        let mut tiles: Vec<Tile> = board.tiles().copied().collect();
        tiles.retain(|t| t.value != 4);
        tiles[0].col = 1;
        tiles[0].x = 180;

        board.rebuild(tiles.iter());
        assert_eq!(board.len(), 2);
        assert!(board.get(0, 0).is_none());
        assert_eq!(board.get(0, 1).unwrap().x, 180);
        assert_eq!(board.get(3, 3).unwrap().value, 8);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_values(
            Geometry::default(),
            [[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]],
        );
        assert_eq!(board.empty_cells().as_slice(), &[(1, 1), (3, 3)]);
    }
}
