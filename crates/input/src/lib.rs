//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and owns the grid
//! cursor the player steers between tiles. The cursor is UI-side state only;
//! game data never hangs off it.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::GridCursor;
pub use map::{map_key, should_quit};
