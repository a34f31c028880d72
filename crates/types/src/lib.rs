//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The classic 2048 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! # Animation Geometry
//!
//! Tiles move in continuous sub-cell units while a slide animates:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CELL_WIDTH` | 200 | Width of one cell in sub-cell units |
//! | `DEFAULT_CELL_HEIGHT` | 200 | Height of one cell in sub-cell units |
//! | `DEFAULT_STEP` | 20 | Distance a tile travels per animation tick |
//! | `TICK_MS` | 8 | Frame pacing between ticks (~120 FPS) |
//!
//! A tile crossing one cell therefore takes `200 / 20 = 10` ticks.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, COLS, ROWS};
//!
//! assert_eq!(Direction::ALL.len(), 4);
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! assert_eq!(ROWS, 4);
//! assert_eq!(COLS, 4);
//! ```

/// Number of rows on the board
pub const ROWS: u8 = 4;

/// Number of columns on the board
pub const COLS: u8 = 4;

/// Total number of cells (board capacity)
pub const CELL_COUNT: usize = (ROWS as usize) * (COLS as usize);

/// Cell width in sub-cell units
pub const DEFAULT_CELL_WIDTH: i32 = 200;

/// Cell height in sub-cell units
pub const DEFAULT_CELL_HEIGHT: i32 = 200;

/// Per-tick travel distance in sub-cell units
pub const DEFAULT_STEP: i32 = 20;

/// Frame pacing between animation ticks in milliseconds (120 FPS)
pub const TICK_MS: u32 = 8;

/// Values a freshly spawned tile can take
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// The four slide directions
///
/// A closed enumeration: there is no way to hand the movement resolver a
/// malformed direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Player actions accepted by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Slide(Direction),
    /// Throw the board away and start over with two fresh tiles
    Restart,
}
