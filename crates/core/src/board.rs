//! Board module - the fixed 4x3 tile grid
//!
//! Twelve tiles in a flat fixed array, each hiding one of six faces. Every
//! face is dealt onto exactly two slots; the assignment is a fair shuffle of
//! the doubled-face deck. Tiles leave play when their pair is matched but the
//! slots themselves never move.

use crate::rng::SessionRng;
use crate::types::{TileFace, PAIR_COUNT, TILE_COUNT};

/// One selectable tile slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    face: TileFace,
    revealed: bool,
    matched: bool,
}

impl Tile {
    fn new(face: TileFace) -> Self {
        Self {
            face,
            revealed: false,
            matched: false,
        }
    }

    /// The face hidden under this tile.
    pub fn face(&self) -> TileFace {
        self.face
    }

    /// Whether the face is currently showing.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether this tile's pair was found (tile is out of play).
    pub fn is_matched(&self) -> bool {
        self.matched
    }
}

/// The game board - 12 tile slots in row-major order (4 columns x 3 rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Deal a fresh board: each face twice, uniformly shuffled.
    pub fn deal(rng: &mut SessionRng) -> Self {
        let mut deck = [TileFace::Sun; TILE_COUNT];
        for (i, face) in TileFace::ALL.iter().enumerate() {
            deck[2 * i] = *face;
            deck[2 * i + 1] = *face;
        }
        rng.shuffle(&mut deck);

        let mut tiles = [Tile::new(TileFace::Sun); TILE_COUNT];
        for (slot, face) in tiles.iter_mut().zip(deck) {
            *slot = Tile::new(face);
        }
        Self { tiles }
    }

    /// Tile at `index`, or `None` when out of range.
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in slot order.
    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    /// Number of pairs already matched out of play.
    pub fn matched_pairs(&self) -> u32 {
        let matched_tiles = self.tiles.iter().filter(|t| t.matched).count();
        (matched_tiles / 2) as u32
    }

    /// True once every tile has left play.
    pub fn is_cleared(&self) -> bool {
        self.matched_pairs() as usize == PAIR_COUNT
    }

    pub(crate) fn reveal(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.revealed = true;
        }
    }

    pub(crate) fn hide(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.revealed = false;
        }
    }

    pub(crate) fn mark_matched(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.matched = true;
            tile.revealed = false;
        }
    }
}
