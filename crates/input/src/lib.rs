//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. A slide is one
//! discrete key press; held keys do not repeat slides.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, is_press, should_quit};
