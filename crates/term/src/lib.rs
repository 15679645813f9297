//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and renders into a simple framebuffer flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (snapshot in, framebuffer out) so it unit-tests
//! - Only [`renderer::TerminalRenderer`] touches the real terminal

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
