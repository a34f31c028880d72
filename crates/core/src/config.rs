//! Configuration module - animation geometry and frame pacing
//!
//! Geometry is an explicit value handed to the [`Board`](crate::Board) at
//! construction. Nothing in the core reads global state, so several boards with
//! different geometry can live side by side (e.g. in parallel tests).

use std::time::Duration;

use thiserror::Error;

use crate::types::{COLS, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_STEP, ROWS, TICK_MS};

/// Rejected geometry or timing values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell {axis} must be positive, got {value}")]
    NonPositiveExtent { axis: &'static str, value: i32 },
    #[error("cell {axis} {value} is too large, at most {max}")]
    ExtentTooLarge { axis: &'static str, value: i32, max: i32 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(i32),
    #[error("step {step} must be smaller than the cell {axis} ({extent})")]
    StepTooLarge {
        axis: &'static str,
        step: i32,
        extent: i32,
    },
    #[error("step {step} must evenly divide the cell {axis} ({extent})")]
    StepDoesNotDivide {
        axis: &'static str,
        step: i32,
        extent: i32,
    },
}

/// Continuous-space geometry of one cell and the per-tick travel distance
///
/// Tiles always come to rest on exact multiples of the cell extents, which
/// only holds when `step` divides both extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    cell_width: i32,
    cell_height: i32,
    step: i32,
}

impl Geometry {
    /// Create validated geometry
    pub fn new(cell_width: i32, cell_height: i32, step: i32) -> Result<Self, ConfigError> {
        // The whole board span must fit in i32 sub-cell units.
        for (axis, extent, cells) in [("width", cell_width, COLS), ("height", cell_height, ROWS)] {
            if extent <= 0 {
                return Err(ConfigError::NonPositiveExtent {
                    axis,
                    value: extent,
                });
            }
            let max = i32::MAX / cells as i32;
            if extent > max {
                return Err(ConfigError::ExtentTooLarge {
                    axis,
                    value: extent,
                    max,
                });
            }
        }
        if step <= 0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        for (axis, extent) in [("width", cell_width), ("height", cell_height)] {
            if step >= extent {
                return Err(ConfigError::StepTooLarge { axis, step, extent });
            }
            if extent % step != 0 {
                return Err(ConfigError::StepDoesNotDivide { axis, step, extent });
            }
        }
        Ok(Self {
            cell_width,
            cell_height,
            step,
        })
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Rest position `(x, y)` of a cell
    #[inline]
    pub fn rest_position(&self, row: u8, col: u8) -> (i32, i32) {
        (col as i32 * self.cell_width, row as i32 * self.cell_height)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            step: DEFAULT_STEP,
        }
    }
}

/// Everything a game session needs besides its random source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub geometry: Geometry,
    /// Pause between animation ticks. Only the front end sleeps on it.
    pub tick: Duration,
}

impl GameConfig {
    pub fn new(geometry: Geometry, tick_ms: u32) -> Self {
        Self {
            geometry,
            tick: Duration::from_millis(tick_ms as u64),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Geometry::default(), TICK_MS)
    }
}
