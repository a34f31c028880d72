//! Spawner - new tiles after a move, and the opening two
//!
//! Cells are chosen uniformly among the empty ones. The random source is
//! injected so tests and replays can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::detector::has_any_move;
use crate::types::SPAWN_VALUES;

/// What follows a settled slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Lost,
}

/// Place a tile at a uniformly random empty cell
///
/// Returns the chosen cell, or `None` when the board is full.
pub fn spawn_random<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(u8, u8)> {
    let empty = board.empty_cells();
    let &(row, col) = empty.choose(rng)?;
    let value = *SPAWN_VALUES.choose(rng)?;
    board.insert_new(row, col, value)?;
    debug!(row, col, value, "spawned tile");
    Some((row, col))
}

/// Spawner step that runs after every slide that moved something
pub fn spawn_after_move<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Verdict {
    if board.is_full() {
        if !has_any_move(board) {
            return Verdict::Lost;
        }
        return Verdict::Continue;
    }
    spawn_random(board, rng);
    Verdict::Continue
}

/// Place the two opening tiles on an empty board
///
/// Opening values come from an even draw in `[2, 4]` rather than the spawn
/// value table; the distribution is the same.
pub fn spawn_initial<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    for _ in 0..2 {
        let empty = board.empty_cells();
        let Some(&(row, col)) = empty.choose(rng) else {
            return;
        };
        let value = rng.gen_range(1..=2u32) * 2;
        board.insert_new(row, col, value);
        debug!(row, col, value, "spawned opening tile");
    }
}
