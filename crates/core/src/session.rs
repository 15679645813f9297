//! Session module - ties the board, selection state machine, and timers together
//!
//! `GameSession` is the single aggregate the UI layer owns and passes into
//! event handlers. It is pure logic: selections and ticks mutate it, feedback
//! leaves it as queued cues, and the finished state is reported as an
//! [`Outcome`] for the composing layer to act on.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SessionRng;
use crate::timer::{Countdown, HideDelay};
use crate::types::{
    Cue, Outcome, GAME_TIME_SECS, HIDE_DELAY_MS, PAIR_COUNT, TIME_WARNING_SECS,
};

/// Upper bound on cues a single frame can produce.
///
/// A frame emits at most a click plus one comparison result plus one timer
/// cue; the headroom covers laggy ticks crossing several warning seconds.
const CUE_QUEUE_CAP: usize = 16;

/// Queue of cues accumulated since the last drain.
pub type CueQueue = ArrayVec<Cue, CUE_QUEUE_CAP>;

/// Where the round stands between selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No unresolved tile is flipped.
    Idle,
    /// One tile is flipped, awaiting the second pick.
    OneRevealed(usize),
    /// Two mismatched tiles are on display until the hide delay fires.
    Resolving { first: usize, second: usize },
}

/// What a call to [`GameSession::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First tile of a comparison revealed.
    FirstRevealed,
    /// Comparison completed with equal faces.
    Matched { won: bool },
    /// Comparison completed with differing faces; tiles revert after the delay.
    Mismatched,
    /// Select had no effect (matched tile, self-click, resolving window,
    /// finished game, or out-of-range index).
    Ignored,
}

/// Complete state of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: SelectionPhase,
    moves: u32,
    pairs_found: u32,
    countdown: Countdown,
    hide_delay: HideDelay,
    cues: CueQueue,
    outcome: Option<Outcome>,
    seed: u32,
}

impl GameSession {
    /// Deal a board from `seed` and start the countdown.
    pub fn new(seed: u32) -> Self {
        let mut rng = SessionRng::new(seed);
        let board = Board::deal(&mut rng);
        let mut countdown = Countdown::new(GAME_TIME_SECS);
        countdown.start();

        Self {
            board,
            phase: SelectionPhase::Idle,
            moves: 0,
            pairs_found: 0,
            countdown,
            hide_delay: HideDelay::new(),
            cues: CueQueue::new(),
            outcome: None,
            seed,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Completed two-tile comparisons so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs taken out of play so far (0..=6).
    pub fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Drain the cues queued since the last call.
    pub fn take_cues(&mut self) -> CueQueue {
        std::mem::take(&mut self.cues)
    }

    fn push_cue(&mut self, cue: Cue) {
        // Dropping on overflow is harmless; the queue is drained every frame.
        let _ = self.cues.try_push(cue);
    }

    /// Select the tile at `index`.
    ///
    /// Reveals faces, counts completed comparisons, and resolves them as
    /// match or mismatch. Selects are ignored while two mismatched tiles are
    /// on display, on matched tiles, on the already-revealed first tile, and
    /// once the game is over.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.outcome.is_some() {
            return SelectOutcome::Ignored;
        }
        let Some(tile) = self.board.tile(index) else {
            return SelectOutcome::Ignored;
        };
        if tile.is_matched() {
            // Matched tiles are removed from play; no feedback at all.
            return SelectOutcome::Ignored;
        }

        // A press on a live tile always clicks, even when the selection
        // below is rejected.
        self.push_cue(Cue::Click);

        match self.phase {
            SelectionPhase::Resolving { .. } => SelectOutcome::Ignored,
            SelectionPhase::Idle => {
                self.board.reveal(index);
                self.phase = SelectionPhase::OneRevealed(index);
                SelectOutcome::FirstRevealed
            }
            SelectionPhase::OneRevealed(first) if first == index => SelectOutcome::Ignored,
            SelectionPhase::OneRevealed(first) => {
                self.board.reveal(index);
                self.moves += 1;
                self.resolve_comparison(first, index)
            }
        }
    }

    fn resolve_comparison(&mut self, first: usize, second: usize) -> SelectOutcome {
        let first_face = self.board.tiles()[first].face();
        let second_face = self.board.tiles()[second].face();

        if first_face == second_face {
            self.board.mark_matched(first);
            self.board.mark_matched(second);
            self.pairs_found += 1;
            self.push_cue(Cue::Match);
            self.phase = SelectionPhase::Idle;

            let won = self.pairs_found as usize == PAIR_COUNT;
            if won {
                self.countdown.stop();
                self.hide_delay.cancel();
                self.push_cue(Cue::Victory);
                self.outcome = Some(Outcome::Won { moves: self.moves });
            }
            SelectOutcome::Matched { won }
        } else {
            self.push_cue(Cue::Mismatch);
            self.hide_delay.arm(HIDE_DELAY_MS);
            self.phase = SelectionPhase::Resolving { first, second };
            SelectOutcome::Mismatched
        }
    }

    /// Advance both timers by `elapsed_ms`.
    ///
    /// Fires the hide delay (reverting a mismatched pair to face-down) and
    /// steps the countdown, emitting warning cues inside the final stretch
    /// and the defeat transition exactly once at zero.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.outcome.is_some() {
            return;
        }

        if self.hide_delay.tick(elapsed_ms) {
            if let SelectionPhase::Resolving { first, second } = self.phase {
                self.board.hide(first);
                self.board.hide(second);
                self.phase = SelectionPhase::Idle;
            }
        }

        let before = self.countdown.remaining_secs();
        let consumed = self.countdown.tick(elapsed_ms);
        for step in 1..=consumed {
            let now = before - step;
            if now == 0 {
                self.hide_delay.cancel();
                self.push_cue(Cue::Defeat);
                self.outcome = Some(Outcome::TimedOut);
                break;
            }
            if now <= TIME_WARNING_SECS {
                self.push_cue(Cue::TimeWarning);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}
