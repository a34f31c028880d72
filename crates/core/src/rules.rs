//! Direction rules - one parameter table instead of four code paths
//!
//! Every slide direction is described by the same handful of derived rules:
//!
//! | Direction | Axis | Order | Unit offset | Edge | Settle rounding |
//! |-----------|------|-------|-------------|------|-----------------|
//! | Left  | col | ascending  | (0, -1) | col 0 | up   |
//! | Right | col | descending | (0, +1) | col 3 | down |
//! | Up    | row | ascending  | (-1, 0) | row 0 | up   |
//! | Down  | row | descending | (+1, 0) | row 3 | down |
//!
//! Tiles nearest the target edge are evaluated first so they vacate space
//! before trailing tiles advance.
//!
//! Settle rounding leans away from the target edge (Left/Up round up,
//! Right/Down round down), so an in-flight tile stays keyed to its origin cell
//! until it fully reaches the next one.

use std::cmp::Ordering;

use crate::config::Geometry;
use crate::tile::Tile;
use crate::types::{Direction, COLS, ROWS};

/// Primary axis of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// Evaluation order along the primary axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// How a continuous position maps back to a discrete index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Up,
    Down,
}

/// Derived movement rules for one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRules {
    pub direction: Direction,
    pub axis: Axis,
    pub order: Order,
    /// Unit offset `(d_row, d_col)` toward the target edge
    pub offset: (i8, i8),
    /// Index on the primary axis of the target edge
    pub edge: u8,
    pub rounding: Rounding,
}

const RULES: [DirectionRules; 4] = [
    DirectionRules {
        direction: Direction::Left,
        axis: Axis::Col,
        order: Order::Ascending,
        offset: (0, -1),
        edge: 0,
        rounding: Rounding::Up,
    },
    DirectionRules {
        direction: Direction::Right,
        axis: Axis::Col,
        order: Order::Descending,
        offset: (0, 1),
        edge: COLS - 1,
        rounding: Rounding::Down,
    },
    DirectionRules {
        direction: Direction::Up,
        axis: Axis::Row,
        order: Order::Ascending,
        offset: (-1, 0),
        edge: 0,
        rounding: Rounding::Up,
    },
    DirectionRules {
        direction: Direction::Down,
        axis: Axis::Row,
        order: Order::Descending,
        offset: (1, 0),
        edge: ROWS - 1,
        rounding: Rounding::Down,
    },
];

/// Look up the rules for a direction
pub fn rules(direction: Direction) -> &'static DirectionRules {
    match direction {
        Direction::Left => &RULES[0],
        Direction::Right => &RULES[1],
        Direction::Up => &RULES[2],
        Direction::Down => &RULES[3],
    }
}

impl DirectionRules {
    #[inline]
    fn primary(&self, tile: &Tile) -> u8 {
        match self.axis {
            Axis::Row => tile.row,
            Axis::Col => tile.col,
        }
    }

    #[inline]
    fn secondary(&self, tile: &Tile) -> u8 {
        match self.axis {
            Axis::Row => tile.col,
            Axis::Col => tile.row,
        }
    }

    /// Continuous coordinate along the primary axis
    #[inline]
    fn position(&self, tile: &Tile) -> i32 {
        match self.axis {
            Axis::Row => tile.y,
            Axis::Col => tile.x,
        }
    }

    /// +1 when travel increases the coordinate, -1 when it decreases it
    #[inline]
    fn sign(&self) -> i32 {
        (self.offset.0 + self.offset.1) as i32
    }

    /// Cell extent along the primary axis
    #[inline]
    pub fn extent(&self, geometry: &Geometry) -> i32 {
        match self.axis {
            Axis::Row => geometry.cell_height(),
            Axis::Col => geometry.cell_width(),
        }
    }

    /// Per-tick displacement `(dx, dy)`
    pub fn step_vector(&self, geometry: &Geometry) -> (i32, i32) {
        let step = geometry.step();
        (self.offset.1 as i32 * step, self.offset.0 as i32 * step)
    }

    /// Tile already sits on the target edge
    #[inline]
    pub fn at_boundary(&self, tile: &Tile) -> bool {
        self.primary(tile) == self.edge
    }

    /// Cell one step closer to the edge, `None` when the tile is on the edge
    pub fn neighbor_cell(&self, tile: &Tile) -> Option<(u8, u8)> {
        if self.at_boundary(tile) {
            return None;
        }
        let row = tile.row.checked_add_signed(self.offset.0)?;
        let col = tile.col.checked_add_signed(self.offset.1)?;
        (row < ROWS && col < COLS).then_some((row, col))
    }

    /// Distance from `neighbor` to `tile` measured against the travel direction
    ///
    /// Positive while `tile` trails `neighbor`; equals the cell extent when
    /// both rest in adjacent cells.
    #[inline]
    pub fn gap(&self, tile: &Tile, neighbor: &Tile) -> i32 {
        (self.position(neighbor) - self.position(tile)) * self.sign()
    }

    /// Move the continuous position one step toward the edge
    #[inline]
    pub fn advance(&self, tile: &mut Tile, geometry: &Geometry) {
        let (dx, dy) = self.step_vector(geometry);
        tile.x += dx;
        tile.y += dy;
    }

    /// Recompute the discrete index on the primary axis from the position
    pub fn settle(&self, tile: &mut Tile, geometry: &Geometry) {
        let extent = self.extent(geometry);
        let pos = self.position(tile);
        let index = match self.rounding {
            Rounding::Up => (pos + extent - 1).div_euclid(extent),
            Rounding::Down => pos.div_euclid(extent),
        };
        let limit = match self.axis {
            Axis::Row => ROWS,
            Axis::Col => COLS,
        };
        let index = index.clamp(0, limit as i32 - 1) as u8;
        match self.axis {
            Axis::Row => tile.row = index,
            Axis::Col => tile.col = index,
        }
    }

    /// Edge-first ordering used to evaluate tiles each tick
    pub fn compare(&self, a: &Tile, b: &Tile) -> Ordering {
        let ka = (self.primary(a), self.secondary(a));
        let kb = (self.primary(b), self.secondary(b));
        match self.order {
            Order::Ascending => ka.cmp(&kb),
            Order::Descending => kb.cmp(&ka),
        }
    }
}
