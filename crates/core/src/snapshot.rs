//! Snapshot module - a render-ready copy of the session state
//!
//! Views consume snapshots instead of the live session so rendering stays
//! decoupled from game logic. `snapshot_into` refills an existing value, so a
//! caller can keep one snapshot for the whole run.

use crate::session::{GameSession, SelectionPhase};
use crate::types::{Outcome, TileFace, GAME_TIME_SECS, TILE_COUNT, TIME_WARNING_SECS};

/// What a single slot shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileView {
    /// Face-down back.
    #[default]
    Hidden,
    /// Face up, comparison unresolved.
    Revealed(TileFace),
    /// Pair found; the slot is an empty gap.
    Removed,
}

/// Render-ready session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub tiles: [TileView; TILE_COUNT],
    pub moves: u32,
    pub pairs_found: u32,
    pub remaining_secs: u32,
    /// Remaining time is inside the warning stretch.
    pub warning: bool,
    /// A mismatched pair is on display awaiting the hide delay.
    pub resolving: bool,
    pub outcome: Option<Outcome>,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.tiles = [TileView::Hidden; TILE_COUNT];
        self.moves = 0;
        self.pairs_found = 0;
        self.remaining_secs = GAME_TIME_SECS;
        self.warning = false;
        self.resolving = false;
        self.outcome = None;
        self.seed = 0;
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            tiles: [TileView::Hidden; TILE_COUNT],
            moves: 0,
            pairs_found: 0,
            remaining_secs: GAME_TIME_SECS,
            warning: false,
            resolving: false,
            outcome: None,
            seed: 0,
        };
        snapshot.clear();
        snapshot
    }
}

impl GameSession {
    /// Fill `out` from the current state without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        for (view, tile) in out.tiles.iter_mut().zip(self.board().tiles()) {
            *view = if tile.is_matched() {
                TileView::Removed
            } else if tile.is_revealed() {
                TileView::Revealed(tile.face())
            } else {
                TileView::Hidden
            };
        }

        out.moves = self.moves();
        out.pairs_found = self.pairs_found();
        out.remaining_secs = self.remaining_secs();
        out.warning = self.remaining_secs() <= TIME_WARNING_SECS;
        out.resolving = matches!(self.phase(), SelectionPhase::Resolving { .. });
        out.outcome = self.outcome();
        out.seed = self.seed();
    }

    /// Convenience helper that builds a fresh snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PAIR_COUNT;

    #[test]
    fn fresh_session_snapshot() {
        let snapshot = GameSession::new(3).snapshot();
        assert!(snapshot.tiles.iter().all(|v| *v == TileView::Hidden));
        assert_eq!(snapshot.moves, 0);
        assert_eq!(snapshot.remaining_secs, GAME_TIME_SECS);
        assert!(!snapshot.warning);
        assert!(!snapshot.resolving);
        assert!(snapshot.outcome.is_none());
    }

    #[test]
    fn snapshot_tracks_reveals_and_removals() {
        let mut session = GameSession::new(3);
        let face = session.board().tiles()[0].face();
        let partner = session
            .board()
            .tiles()
            .iter()
            .enumerate()
            .position(|(i, t)| i != 0 && t.face() == face)
            .unwrap();

        session.select(0);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.tiles[0], TileView::Revealed(face));

        session.select(partner);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.tiles[0], TileView::Removed);
        assert_eq!(snapshot.tiles[partner], TileView::Removed);
        assert_eq!(snapshot.pairs_found, 1);
    }

    #[test]
    fn snapshot_into_reuses_the_buffer() {
        let mut session = GameSession::new(3);
        let mut snapshot = SessionSnapshot::default();

        session.select(0);
        session.snapshot_into(&mut snapshot);
        assert!(matches!(snapshot.tiles[0], TileView::Revealed(_)));

        // Win the game and refill the same buffer. Tile 0 is the pending
        // first pick, so its face has to be completed first.
        let first_face = session.board().tiles()[0].face();
        let mut faces = vec![first_face];
        faces.extend(TileFace::ALL.into_iter().filter(|f| *f != first_face));
        for face in faces {
            let mut slots = session
                .board()
                .tiles()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.face() == face)
                .map(|(i, _)| i);
            let (a, b) = (slots.next().unwrap(), slots.next().unwrap());
            session.select(a);
            session.select(b);
        }
        session.snapshot_into(&mut snapshot);
        assert_eq!(snapshot.pairs_found, PAIR_COUNT as u32);
        assert!(matches!(snapshot.outcome, Some(Outcome::Won { .. })));
    }
}
