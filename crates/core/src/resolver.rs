//! Movement resolver - animated slide-and-merge
//!
//! A slide is a sequence of ticks. Each tick moves every movable tile one
//! `step` toward the target edge and resolves merges, until a tick changes
//! nothing. Ticks run in two phases:
//!
//! 1. **Plan**: tiles are visited edge-first against the board as it stood at
//!    the start of the tick. Each decision sees the planned state of the tiles
//!    already visited (their new positions, and whether they were absorbed).
//! 2. **Commit**: moved tiles get their discrete cell recomputed and the board
//!    is rebuilt from the planned set in one go.
//!
//! Per tile, with `gap` the distance to the tile in the next cell toward the edge:
//!
//! - no neighbor (or it was absorbed this tick): advance
//! - equal value, neither locked, `gap > step`: advance (merge deferred)
//! - equal value, neither locked, `gap <= step`: merge into the neighbor,
//!   which doubles and becomes locked for the rest of the slide
//! - otherwise advance only while the tile still clears the neighbor
//!   (`gap - step >= extent`), else it is blocked
//!
//! The lock set is what limits every tile to one merge per slide.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::rules::{rules, DirectionRules};
use crate::tile::{Tile, TileId};
use crate::types::{Direction, CELL_COUNT};

/// Receives the board after every animation tick
///
/// Rendering is optional: the resolver behaves the same whether or not
/// anything observes it.
pub trait TickObserver {
    fn on_tick(&mut self, board: &Board);
}

impl<F: FnMut(&Board)> TickObserver for F {
    fn on_tick(&mut self, board: &Board) {
        self(board)
    }
}

/// Summary of one complete slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideReport {
    /// At least one tile moved or merged
    pub moved: bool,
    /// Number of merge events
    pub merges: u32,
    /// Number of ticks that changed the board
    pub ticks: u32,
}

impl SlideReport {
    pub fn is_noop(&self) -> bool {
        !self.moved
    }
}

#[derive(Debug, Clone, Copy)]
struct Plan {
    tile: Tile,
    moved: bool,
    absorbed: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct TickOutcome {
    advanced: u32,
    merges: u32,
}

/// Slide every tile on `board` toward `direction` until nothing moves
pub fn slide<O>(board: &mut Board, direction: Direction, observer: &mut O) -> SlideReport
where
    O: TickObserver + ?Sized,
{
    let rules = rules(direction);
    let mut locked: ArrayVec<TileId, CELL_COUNT> = ArrayVec::new();
    let mut report = SlideReport::default();

    loop {
        let outcome = tick(board, rules, &mut locked);
        if outcome.advanced == 0 && outcome.merges == 0 {
            break;
        }
        report.moved = true;
        report.ticks += 1;
        report.merges += outcome.merges;
        trace!(
            direction = direction.as_str(),
            tick = report.ticks,
            advanced = outcome.advanced,
            merges = outcome.merges,
            "tick"
        );
        observer.on_tick(board);
    }

    debug_assert!(
        board.tiles().all(|t| t.is_at_rest(board.geometry())),
        "slide finished with tiles off their cells"
    );
    debug!(
        direction = direction.as_str(),
        ticks = report.ticks,
        merges = report.merges,
        tiles = board.len(),
        "slide settled"
    );
    report
}

/// Slide without observing intermediate ticks
pub fn slide_silent(board: &mut Board, direction: Direction) -> SlideReport {
    slide(board, direction, &mut |_: &Board| {})
}

fn tick(
    board: &mut Board,
    rules: &DirectionRules,
    locked: &mut ArrayVec<TileId, CELL_COUNT>,
) -> TickOutcome {
    let geometry = *board.geometry();
    let step = geometry.step();
    let extent = rules.extent(&geometry);

    let mut plans: ArrayVec<Plan, CELL_COUNT> = board
        .tiles()
        .map(|&tile| Plan {
            tile,
            moved: false,
            absorbed: false,
        })
        .collect();
    plans.sort_by(|a, b| rules.compare(&a.tile, &b.tile));

    let mut outcome = TickOutcome::default();

    for i in 0..plans.len() {
        let tile = plans[i].tile;
        let Some((row, col)) = rules.neighbor_cell(&tile) else {
            continue;
        };

        // The neighbor sits closer to the edge, so it was planned earlier.
        let neighbor = board
            .get(row, col)
            .and_then(|n| plans.iter().position(|p| p.tile.id == n.id))
            .filter(|&j| !plans[j].absorbed);

        let advance = match neighbor {
            None => true,
            Some(j) => {
                let next = plans[j].tile;
                let gap = rules.gap(&tile, &next);
                let mergeable = tile.value == next.value
                    && !locked.contains(&tile.id)
                    && !locked.contains(&next.id);

                if mergeable && gap <= step {
                    plans[j].tile.value *= 2;
                    plans[i].absorbed = true;
                    locked.push(next.id);
                    outcome.merges += 1;
                    false
                } else if mergeable {
                    true
                } else {
                    gap - step >= extent
                }
            }
        };

        if advance {
            rules.advance(&mut plans[i].tile, &geometry);
            plans[i].moved = true;
            outcome.advanced += 1;
        }
    }

    if outcome.advanced == 0 && outcome.merges == 0 {
        return outcome;
    }

    for plan in plans.iter_mut().filter(|p| p.moved) {
        rules.settle(&mut plan.tile, &geometry);
    }
    board.rebuild(plans.iter().filter(|p| !p.absorbed).map(|p| &p.tile));

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Geometry;

    fn board(grid: [[u32; 4]; 4]) -> Board {
        Board::from_values(Geometry::default(), grid)
    }

    #[test]
    fn adjacent_pair_merges_into_edge_tile() {
        let mut b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let edge_id = b.get(0, 0).unwrap().id;

        let report = slide_silent(&mut b, Direction::Left);
        assert!(report.moved);
        assert_eq!(report.merges, 1);
        assert_eq!(b.values(), [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(b.get(0, 0).unwrap().id, edge_id);
    }

    #[test]
    fn merge_takes_a_cell_worth_of_ticks() {
        let mut b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let report = slide_silent(&mut b, Direction::Left);
        // 9 ticks of approach, 1 merge tick.
        assert_eq!(report.ticks, 10);
    }

    #[test]
    fn packed_row_is_noop() {
        let grid = [[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]];
        let mut b = board(grid);
        let before = b.clone();
        let report = slide_silent(&mut b, Direction::Left);
        assert!(report.is_noop());
        assert_eq!(report.ticks, 0);
        assert_eq!(b, before);
    }

    #[test]
    fn observer_sees_every_changing_tick() {
        let mut b = board([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let mut xs = Vec::new();
        let report = slide(&mut b, Direction::Left, &mut |board: &Board| {
            xs.push(board.tiles().next().unwrap().x);
        });
        assert_eq!(report.ticks, 30);
        assert_eq!(xs.len(), 30);
        assert_eq!(xs.first(), Some(&580));
        assert_eq!(xs.last(), Some(&0));
        assert!(xs.windows(2).all(|w| w[1] == w[0] - 20));
    }

    #[test]
    fn locked_tile_does_not_merge_twice() {
        let mut b = board([[4, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let report = slide_silent(&mut b, Direction::Left);
        assert_eq!(report.merges, 1);
        assert_eq!(b.values()[0], [4, 4, 0, 0]);
    }

    #[test]
    fn inflight_tiles_never_share_a_cell() {
        // A trailing equal pair behind a lagging tile.
        let mut b = board([[0, 4, 2, 2], [0; 4], [0; 4], [0; 4]]);
        slide(&mut b, Direction::Left, &mut |board: &Board| {
            assert_eq!(board.total(), 8);
        });
        assert_eq!(b.values()[0], [4, 4, 0, 0]);
    }
}
