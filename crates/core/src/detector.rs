//! Terminal-state detector
//!
//! A move remains while there is an empty cell, or while two orthogonally
//! adjacent cells hold equal values. Either condition alone is enough.

use crate::board::Board;

const NEIGHBOR_OFFSETS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if some slide can still change the board
pub fn has_any_move(board: &Board) -> bool {
    if !board.is_full() {
        return true;
    }
    has_adjacent_pair(board)
}

/// True if any two orthogonally adjacent tiles share a value
pub fn has_adjacent_pair(board: &Board) -> bool {
    for tile in board.tiles() {
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let row = tile.row as i16 + dr;
            let col = tile.col as i16 + dc;
            if !Board::in_bounds(row, col) {
                continue;
            }
            if let Some(n) = board.get(row as u8, col as u8) {
                if n.value == tile.value {
                    return true;
                }
            }
        }
    }
    false
}
