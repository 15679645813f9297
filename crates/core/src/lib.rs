//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed deals the same board
//! - **Testable**: every rule is exercised without a terminal or sound device
//! - **Portable**: can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: the fixed 4x3 tile grid and the doubled-face deal
//! - [`session`]: selection state machine, counters, cue queue, outcome
//! - [`timer`]: the countdown and the mismatch hide delay, kept independent
//! - [`rng`]: seeded LCG with Fisher-Yates shuffling
//! - [`snapshot`]: render-ready copies of the session state
//!
//! # Game Rules
//!
//! - Twelve face-down tiles hide six pairs; a turn flips two tiles.
//! - Equal faces leave play immediately; unequal faces flip back after a
//!   one-second delay during which further selects are ignored.
//! - Finding all six pairs wins and stops the countdown; the countdown
//!   reaching zero loses. Either way the session reports an [`Outcome`]
//!   and goes inert.
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{GameSession, SelectOutcome};
//!
//! let mut session = GameSession::new(12345);
//! assert_eq!(session.select(0), SelectOutcome::FirstRevealed);
//!
//! // Drive the clocks from the event loop.
//! session.tick(16);
//! assert!(session.outcome().is_none());
//! ```

pub mod board;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use rng::SessionRng;
pub use session::{CueQueue, GameSession, SelectOutcome, SelectionPhase};
pub use snapshot::{SessionSnapshot, TileView};
pub use timer::{Countdown, HideDelay};
pub use types::Outcome;
