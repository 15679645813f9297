//! BoardView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{SessionSnapshot, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, TileFace, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the pairs board.
pub struct BoardView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Gap between tiles, both axes.
    gap: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 7x3 tiles read as roughly square in typical terminal glyphs.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self { tile_w, tile_h, gap }
    }

    /// Render into an existing framebuffer, reusable across frames.
    ///
    /// `cursor_index` highlights the hovered tile; pass `None` once the
    /// session is over and the cursor has nothing left to select.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor_index: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = GRID_COLS as u16;
        let rows = GRID_ROWS as u16;
        let grid_w = cols * self.tile_w + (cols - 1) * self.gap;
        let grid_h = rows * self.tile_h + (rows - 1) * self.gap;
        let frame_w = grid_w + 4;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 4) / 2 + 1;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let title = CellStyle::default().bold();

        fb.put_str_centered(start_x, start_y.saturating_sub(1), frame_w, "P A I R S", title);
        self.draw_frame(fb, start_x, start_y, frame_w, frame_h, border);

        for index in 0..snap.tiles.len() {
            let col = (index as u16) % cols;
            let row = (index as u16) / cols;
            let x = start_x + 2 + col * (self.tile_w + self.gap);
            let y = start_y + 1 + row * (self.tile_h + self.gap);
            let hovered = cursor_index == Some(index);
            self.draw_tile(fb, x, y, snap.tiles[index], hovered);
        }

        self.draw_hud(fb, snap, start_x, start_y + frame_h, frame_w);

        if let Some(outcome) = snap.outcome {
            self.draw_banner(fb, outcome, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor_index: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor_index, viewport, &mut fb);
        fb
    }

    fn draw_frame(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, view: TileView, hovered: bool) {
        match view {
            TileView::Hidden => {
                let bg = if hovered {
                    Rgb::new(90, 90, 140)
                } else {
                    Rgb::new(40, 40, 60)
                };
                let back = CellStyle::new(Rgb::new(110, 110, 140), bg);
                fb.fill_rect(x, y, self.tile_w, self.tile_h, '▒', back);
                fb.put_char(
                    x + self.tile_w / 2,
                    y + self.tile_h / 2,
                    '?',
                    CellStyle::new(Rgb::new(190, 190, 210), bg).bold(),
                );
            }
            TileView::Revealed(face) => {
                let bg = if hovered {
                    Rgb::new(55, 55, 80)
                } else {
                    Rgb::new(25, 25, 35)
                };
                let face_style = CellStyle::new(face_color(face), bg).bold();
                fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', face_style);
                fb.put_char(x + self.tile_w / 2, y + self.tile_h / 2, face.glyph(), face_style);
            }
            TileView::Removed => {
                // Matched tiles leave an empty gap.
                fb.fill_rect(
                    x,
                    y,
                    self.tile_w,
                    self.tile_h,
                    ' ',
                    CellStyle::default(),
                );
            }
        }
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        x: u16,
        y: u16,
        w: u16,
    ) {
        let normal = CellStyle::default();
        let warning = CellStyle::new(Rgb::new(235, 70, 70), Rgb::new(0, 0, 0)).bold();

        let moves = format!("Moves: {}", snap.moves);
        let pairs = format!("Pairs: {}/{}", snap.pairs_found, snap.tiles.len() / 2);
        let time = format!("Time: {}s", snap.remaining_secs);

        fb.put_str(x + 1, y, &moves, normal);
        fb.put_str_centered(x, y, w, &pairs, normal);
        let time_x = (x + w).saturating_sub(time.chars().count() as u16 + 1);
        fb.put_str(time_x, y, &time, if snap.warning { warning } else { normal });

        let hint = "arrows move · enter flip · r restart · q quit";
        let dim = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));
        fb.put_str_centered(x, y + 1, w, hint, dim);
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        outcome: Outcome,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let (line, bg) = match outcome {
            Outcome::Won { moves } => (
                format!("YOU WIN - {} MOVES", moves),
                Rgb::new(20, 70, 30),
            ),
            Outcome::TimedOut => ("TIME'S UP - YOU LOSE".to_string(), Rgb::new(80, 20, 20)),
        };
        let style = CellStyle::new(Rgb::new(240, 240, 240), bg).bold();
        let prompt_style = CellStyle::new(Rgb::new(210, 210, 210), bg);

        let banner_w = (line.chars().count() as u16 + 6).max(28);
        let banner_x = x + w.saturating_sub(banner_w) / 2;
        let banner_y = y + h / 2 - 2;

        fb.fill_rect(banner_x, banner_y, banner_w, 4, ' ', style);
        fb.put_str_centered(banner_x, banner_y + 1, banner_w, &line, style);
        fb.put_str_centered(banner_x, banner_y + 2, banner_w, "R: play again · Q: quit", prompt_style);
    }
}

fn face_color(face: TileFace) -> Rgb {
    match face {
        TileFace::Sun => Rgb::new(240, 200, 60),
        TileFace::Moon => Rgb::new(150, 200, 240),
        TileFace::Star => Rgb::new(230, 120, 230),
        TileFace::Heart => Rgb::new(230, 70, 90),
        TileFace::Clover => Rgb::new(90, 200, 110),
        TileFace::Diamond => Rgb::new(90, 140, 240),
    }
}
