//! Resolver tests - slide scenarios and properties over many seeded boards

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_2048::core::{slide, slide_silent, Board, Geometry, Tile, TileId};
use tui_2048::types::Direction;

type Grid = [[u32; 4]; 4];

fn board(grid: Grid) -> Board {
    Board::from_values(Geometry::default(), grid)
}

/// Classic 2048 line rule: compact toward index 0, merge equal pairs once.
fn compress_and_merge(line: [u32; 4]) -> ([u32; 4], u32) {
    let mut out = [0u32; 4];
    let mut merges = 0;
    let mut n = 0;
    let mut pending: Option<u32> = None;
    for v in line.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(p) if p == v => {
                out[n] = p * 2;
                n += 1;
                merges += 1;
                pending = None;
            }
            Some(p) => {
                out[n] = p;
                n += 1;
                pending = Some(v);
            }
            None => pending = Some(v),
        }
    }
    if let Some(p) = pending {
        out[n] = p;
    }
    (out, merges)
}

/// Cells of row/column `k`, starting at the target edge.
fn line_cells(k: usize, direction: Direction) -> [(usize, usize); 4] {
    match direction {
        Direction::Left => [(k, 0), (k, 1), (k, 2), (k, 3)],
        Direction::Right => [(k, 3), (k, 2), (k, 1), (k, 0)],
        Direction::Up => [(0, k), (1, k), (2, k), (3, k)],
        Direction::Down => [(3, k), (2, k), (1, k), (0, k)],
    }
}

fn reference(grid: Grid, direction: Direction) -> (Grid, u32) {
    let mut out = [[0u32; 4]; 4];
    let mut merges = 0;
    for k in 0..4 {
        let cells = line_cells(k, direction);
        let line = cells.map(|(r, c)| grid[r][c]);
        let (merged, m) = compress_and_merge(line);
        merges += m;
        for (i, (r, c)) in cells.into_iter().enumerate() {
            out[r][c] = merged[i];
        }
    }
    (out, merges)
}

fn random_grid(rng: &mut StdRng) -> Grid {
    let mut grid = [[0u32; 4]; 4];
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = match rng.gen_range(0..6) {
                0 | 1 => 0,
                2 | 3 => 2,
                4 => 4,
                _ => 8,
            };
        }
    }
    grid
}

#[test]
fn pair_merges_left() {
    let mut b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let report = slide_silent(&mut b, Direction::Left);
    assert_eq!(b.values(), [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(b.len(), 1);
    assert_eq!(report.merges, 1);
}

#[test]
fn four_of_a_kind_merges_in_pairs() {
    let mut b = board([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let report = slide_silent(&mut b, Direction::Left);
    assert_eq!(b.values()[0], [4, 4, 0, 0]);
    assert_eq!(report.merges, 2);
    assert_eq!(report.ticks, 20);

    let mut b = board([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    slide_silent(&mut b, Direction::Right);
    assert_eq!(b.values()[0], [0, 0, 4, 4]);
}

#[test]
fn merged_tile_does_not_merge_again() {
    // 2+2 makes a 4 that must not swallow the existing 4.
    let mut b = board([[0; 4], [0; 4], [0; 4], [4, 0, 2, 2]]);
    slide_silent(&mut b, Direction::Right);
    assert_eq!(b.values()[3], [0, 0, 4, 4]);
}

#[test]
fn copied_tile_merges_independently() {
    // The copy comes from the (0,0) tile, which gets locked by the 2+2 merge.
    let mut b = board([[2, 2, 8, 0], [0; 4], [0; 4], [0; 4]]);
    let source = *b.get(0, 0).unwrap();
    b.set(0, 3, Tile { value: 8, ..source });

    let report = slide_silent(&mut b, Direction::Left);
    assert_eq!(b.values()[0], [4, 16, 0, 0]);
    assert_eq!(report.merges, 2);
}

#[test]
fn columns_slide_up_and_down() {
    let grid = [[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]];
    let mut b = board(grid);
    slide_silent(&mut b, Direction::Up);
    assert_eq!(b.values(), [[4, 0, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);

    let mut b = board(grid);
    slide_silent(&mut b, Direction::Down);
    assert_eq!(b.values(), [[0; 4], [0; 4], [4, 0, 0, 0], [8, 0, 0, 0]]);
}

#[test]
fn tile_ids_survive_a_plain_move() {
    let mut b = board([[0, 0, 0, 8], [0; 4], [0; 4], [0; 4]]);
    let id = b.get(0, 3).unwrap().id;
    slide_silent(&mut b, Direction::Left);
    assert_eq!(b.get(0, 0).map(|t| t.id), Some(id));
}

#[test]
fn lone_tile_crosses_the_row_in_whole_cells() {
    let mut b = board([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let mut cols = Vec::new();
    let report = slide(&mut b, Direction::Left, &mut |board: &Board| {
        let t = board.tiles().next().unwrap();
        cols.push(t.col);
    });
    // 3 cells of 200 at 20 per tick.
    assert_eq!(report.ticks, 30);
    // Keyed to the cell it is leaving until it reaches the next one.
    assert_eq!(cols[0], 3);
    assert_eq!(cols[9], 2);
    assert_eq!(cols[29], 0);
}

#[test]
fn coarse_geometry_takes_fewer_ticks() {
    let geometry = Geometry::new(100, 100, 50).unwrap();
    let mut b = Board::from_values(geometry, [[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let report = slide_silent(&mut b, Direction::Left);
    assert_eq!(report.ticks, 6);
    assert_eq!(b.values()[0], [2, 0, 0, 0]);
}

#[test]
fn checkerboard_is_a_noop_in_every_direction() {
    let grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    for dir in Direction::ALL {
        let mut b = board(grid);
        let report = slide_silent(&mut b, dir);
        assert!(report.is_noop(), "{dir:?}");
        assert_eq!(b, board(grid));
    }
}

#[test]
fn matches_line_model_over_many_boards() {
    let mut rng = StdRng::seed_from_u64(2048);
    for _ in 0..500 {
        let grid = random_grid(&mut rng);
        for dir in Direction::ALL {
            let mut b = board(grid);
            let report = slide_silent(&mut b, dir);
            let (expected, merges) = reference(grid, dir);
            assert_eq!(b.values(), expected, "{grid:?} {dir:?}");
            assert_eq!(report.merges, merges, "{grid:?} {dir:?}");
            assert_eq!(report.moved, expected != grid, "{grid:?} {dir:?}");
        }
    }
}

#[test]
fn conservation_holds_on_every_tick() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        for dir in Direction::ALL {
            let mut b = board(grid);
            let total = b.total();
            let count = b.len();
            let mut ok = true;
            let report = slide(&mut b, dir, &mut |board: &Board| {
                ok &= board.total() == total;
            });
            assert!(ok, "{grid:?} {dir:?}");
            assert_eq!(b.total(), total);
            assert_eq!(b.len(), count - report.merges as usize);
        }
    }
}

#[test]
fn every_tile_merges_at_most_once() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        for dir in Direction::ALL {
            let mut b = board(grid);
            let before: Vec<(TileId, u32)> = b.tiles().map(|t| (t.id, t.value)).collect();
            slide_silent(&mut b, dir);
            for t in b.tiles() {
                if let Some(&(_, v)) = before.iter().find(|(id, _)| *id == t.id) {
                    assert!(t.value == v || t.value == v * 2, "{grid:?} {dir:?}");
                }
            }
        }
    }
}

#[test]
fn settled_boards_rest_on_cells_and_are_packed() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        for dir in Direction::ALL {
            let mut b = board(grid);
            slide_silent(&mut b, dir);
            assert!(b.tiles().all(|t| t.is_at_rest(b.geometry())));

            // No hole between a tile and the target edge.
            let after = b.values();
            for k in 0..4 {
                let line = line_cells(k, dir).map(|(r, c)| after[r][c]);
                let first_hole = line.iter().position(|&v| v == 0).unwrap_or(4);
                assert!(line[first_hole..].iter().all(|&v| v == 0), "{grid:?} {dir:?}");
            }

            // Another slide is a no-op unless a new pair formed.
            let settled = b.clone();
            let report = slide_silent(&mut b, dir);
            if reference(after, dir).0 == after {
                assert!(report.is_noop(), "{grid:?} {dir:?}");
                assert_eq!(b, settled);
            } else {
                assert!(report.merges > 0, "{grid:?} {dir:?}");
            }
        }
    }
}

#[test]
fn new_pairs_merge_on_the_next_slide() {
    let mut b = board([[2, 2, 0, 4], [0; 4], [0; 4], [0; 4]]);
    slide_silent(&mut b, Direction::Left);
    assert_eq!(b.values()[0], [4, 4, 0, 0]);
    slide_silent(&mut b, Direction::Left);
    assert_eq!(b.values()[0], [8, 0, 0, 0]);
}
