//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: tile storage, the animated
//! slide-and-merge resolver, spawning and terminal-state detection.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Fixed-capacity buffers, no allocation while sliding
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 coordinate-keyed tile storage
//! - [`config`]: Cell geometry, step size and frame pacing
//! - [`detector`]: Whether any move remains
//! - [`game`]: Session state machine (slide, spawn, lose, restart)
//! - [`resolver`]: Tick-by-tick slide and merge resolution
//! - [`rules`]: Per-direction parameter table
//! - [`snapshot`]: Copyable view of the board for renderers
//! - [`spawner`]: Random tile placement
//! - [`tile`]: A numbered tile and its animated position
//!
//! # Game Rules
//!
//! - A slide moves every tile toward one edge until it is blocked
//! - Two equal tiles that meet merge into one of double value
//! - A tile merges at most once per slide; the edge-most pair merges first
//! - A slide that moves nothing spawns nothing
//! - After a slide that moved something, a 2 or 4 appears in a random empty cell
//! - The game is lost when the board is full and no two neighbors are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameConfig, GameState, Geometry, SlideOutcome};
//! use tui_2048_types::Direction;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let board = Board::from_values(
//!     Geometry::default(),
//!     [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
//! );
//! let mut game = GameState::from_board(board, StdRng::seed_from_u64(7));
//!
//! assert_eq!(game.slide(Direction::Left), SlideOutcome::Continue);
//! assert_eq!(game.board().get(0, 0).map(|t| t.value), Some(4));
//! assert_eq!(game.board().len(), 2); // the merged 4 plus one spawn
//!
//! // A fresh seeded game always opens with two tiles.
//! let game = GameState::with_seed(GameConfig::default(), 42);
//! assert_eq!(game.board().len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod detector;
pub mod game;
pub mod resolver;
pub mod rules;
pub mod snapshot;
pub mod spawner;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig, Geometry};
pub use detector::{has_adjacent_pair, has_any_move};
pub use game::{GameState, Phase, SlideOutcome};
pub use resolver::{slide, slide_silent, SlideReport, TickObserver};
pub use rules::{rules, DirectionRules};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use spawner::{spawn_after_move, spawn_initial, spawn_random, Verdict};
pub use tile::{Tile, TileId};
