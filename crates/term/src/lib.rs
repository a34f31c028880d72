//! Terminal rendering for the 2048 board.
//!
//! Like the rest of the workspace this avoids widget frameworks: the board is
//! drawn into a plain framebuffer and flushed through crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: terminal setup, teardown and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, BoardView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
