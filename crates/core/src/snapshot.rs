use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::Geometry;
use crate::tile::Tile;
use crate::types::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub value: u32,
    pub row: u8,
    pub col: u8,
    pub x: i32,
    pub y: i32,
}

impl From<&Tile> for TileSnapshot {
    fn from(value: &Tile) -> Self {
        Self {
            value: value.value,
            row: value.row,
            col: value.col,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tiles: ArrayVec<TileSnapshot, CELL_COUNT>,
    pub geometry: Geometry,
    pub game_over: bool,
    pub slides: u32,
    pub episode_id: u32,
    pub best_tile: u32,
}

impl GameSnapshot {
    /// Capture a bare board, e.g. mid-slide
    pub fn of_board(board: &Board) -> Self {
        Self {
            tiles: board.tiles().map(TileSnapshot::from).collect(),
            geometry: *board.geometry(),
            game_over: false,
            slides: 0,
            episode_id: 0,
            best_tile: board.max_value(),
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::of_board(&Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_mirrors_board() {
        let board = Board::from_values(
            Geometry::default(),
            [[2, 0, 0, 0], [0, 0, 16, 0], [0; 4], [0, 0, 0, 4]],
        );
        let snap = GameSnapshot::of_board(&board);
        assert_eq!(snap.tiles.len(), 3);
        let cells: Vec<(u8, u8, u32)> = snap.tiles.iter().map(|t| (t.row, t.col, t.value)).collect();
        assert_eq!(cells, vec![(0, 0, 2), (1, 2, 16), (3, 3, 4)]);
        assert_eq!((snap.tiles[1].x, snap.tiles[1].y), (400, 200));
        assert_eq!(snap.best_tile, 16);
        assert!(!snap.game_over);
    }

    #[test]
    fn default_is_empty() {
        let snap = GameSnapshot::default();
        assert!(snap.tiles.is_empty());
        assert_eq!(snap.best_tile, 0);
    }
}
