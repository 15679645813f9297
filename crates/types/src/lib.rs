//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, audio playback).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x3 grid of tiles:
//!
//! - **Columns**: 4 (indexed 0-3)
//! - **Rows**: 3 (indexed 0-2)
//! - **Tiles**: 12, hiding 6 face pairs
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds unless suffixed `_SECS`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SECOND_MS` | 1000 | One countdown step |
//! | `GAME_TIME_SECS` | 60 | Countdown budget per session |
//! | `TIME_WARNING_SECS` | 10 | Threshold for the time-warning cue |
//! | `HIDE_DELAY_MS` | 1000 | Delay before mismatched tiles flip back |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{GameAction, TileFace, GRID_COLS, GRID_ROWS, TILE_COUNT};
//!
//! // Parse a face from string (case-insensitive)
//! let face = TileFace::from_str("Sun").unwrap();
//! assert_eq!(face, TileFace::Sun);
//!
//! // Parse a game action
//! let action = GameAction::from_str("flip").unwrap();
//! assert_eq!(action, GameAction::Flip);
//!
//! // Board dimensions
//! assert_eq!(GRID_COLS as usize * GRID_ROWS as usize, TILE_COUNT);
//! ```

/// Board width in tiles (4 columns)
pub const GRID_COLS: u8 = 4;

/// Board height in tiles (3 rows)
pub const GRID_ROWS: u8 = 3;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// Number of face pairs hidden on the board
pub const PAIR_COUNT: usize = TILE_COUNT / 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One countdown step in milliseconds
pub const SECOND_MS: u32 = 1000;

/// Countdown budget per session, in whole seconds
pub const GAME_TIME_SECS: u32 = 60;

/// Remaining-time threshold at which the warning cue starts firing
pub const TIME_WARNING_SECS: u32 = 10;

/// Delay before a mismatched pair flips back face-down
pub const HIDE_DELAY_MS: u32 = 1000;

/// File name of the looping background track, relative to the asset directory
pub const BACKGROUND_MUSIC_FILE: &str = "background_music.wav";

/// The six tile faces
///
/// Each face appears on exactly two tiles. Faces carry a single-width
/// terminal glyph so the view never has to deal with wide characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFace {
    Sun,
    Moon,
    Star,
    Heart,
    Clover,
    Diamond,
}

impl TileFace {
    /// All faces, in declaration order
    pub const ALL: [TileFace; PAIR_COUNT] = [
        TileFace::Sun,
        TileFace::Moon,
        TileFace::Star,
        TileFace::Heart,
        TileFace::Clover,
        TileFace::Diamond,
    ];

    /// Parse a face from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::TileFace;
    ///
    /// assert_eq!(TileFace::from_str("sun"), Some(TileFace::Sun));
    /// assert_eq!(TileFace::from_str("Diamond"), Some(TileFace::Diamond));
    /// assert_eq!(TileFace::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sun" => Some(TileFace::Sun),
            "moon" => Some(TileFace::Moon),
            "star" => Some(TileFace::Star),
            "heart" => Some(TileFace::Heart),
            "clover" => Some(TileFace::Clover),
            "diamond" => Some(TileFace::Diamond),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TileFace::Sun => "sun",
            TileFace::Moon => "moon",
            TileFace::Star => "star",
            TileFace::Heart => "heart",
            TileFace::Clover => "clover",
            TileFace::Diamond => "diamond",
        }
    }

    /// Single-width glyph shown on a revealed tile
    pub fn glyph(&self) -> char {
        match self {
            TileFace::Sun => '☀',
            TileFace::Moon => '☾',
            TileFace::Star => '★',
            TileFace::Heart => '♥',
            TileFace::Clover => '♣',
            TileFace::Diamond => '♦',
        }
    }
}

/// Game actions produced by the input layer
///
/// Cursor actions move the grid cursor; `Flip` selects the hovered tile.
/// `Restart` abandons the current session and deals a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move cursor one tile left
    CursorLeft,
    /// Move cursor one tile right
    CursorRight,
    /// Move cursor one tile up
    CursorUp,
    /// Move cursor one tile down
    CursorDown,
    /// Flip the tile under the cursor
    Flip,
    /// Start a fresh session (at any time, or from the end-of-game banner)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("flip"), Some(GameAction::Flip));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "flip" => Some(GameAction::Flip),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::Flip => "flip",
            GameAction::Restart => "restart",
        }
    }
}

/// Feedback cues emitted on session state transitions
///
/// Cues are stateless triggers. The session queues them; the composing layer
/// drains the queue once per frame and forwards each cue to the audio port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A live tile was selected
    Click,
    /// A completed comparison matched
    Match,
    /// A completed comparison did not match
    Mismatch,
    /// Countdown stepped at or below the warning threshold
    TimeWarning,
    /// All pairs found
    Victory,
    /// Countdown reached zero
    Defeat,
}

impl Cue {
    /// All cues, in declaration order
    pub const ALL: [Cue; 6] = [
        Cue::Click,
        Cue::Match,
        Cue::Mismatch,
        Cue::TimeWarning,
        Cue::Victory,
        Cue::Defeat,
    ];

    /// Asset file name for this cue, relative to the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Cue::Click => "click_sound.wav",
            Cue::Match => "match_sound.wav",
            Cue::Mismatch => "mismatch_sound.wav",
            Cue::TimeWarning => "time_warning_sound.wav",
            Cue::Victory => "victory_sound.wav",
            Cue::Defeat => "defeat_sound.wav",
        }
    }

    /// Stable index into [`Cue::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Cue::Click => 0,
            Cue::Match => 1,
            Cue::Mismatch => 2,
            Cue::TimeWarning => 3,
            Cue::Victory => 4,
            Cue::Defeat => 5,
        }
    }
}

/// Terminal state of a finished session
///
/// Reported to the composing layer, which decides whether to exit the
/// process or deal a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All six pairs found before the countdown expired
    Won { moves: u32 },
    /// The countdown reached zero first
    TimedOut,
}
