//! Matching pairs for the terminal (workspace facade crate).
//!
//! This package keeps the `tui_pairs::{core,input,term,audio,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_pairs_audio as audio;
pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
