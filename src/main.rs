//! Terminal pairs runner (default binary).
//!
//! This is the primary gameplay entrypoint. It owns the event loop:
//! crossterm input, a fixed timestep driving the session clocks, and the
//! sound bank fed from the session's cue queue.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::audio::{CuePlayer, SoundBank};
use tui_pairs::core::{GameSession, SessionSnapshot};
use tui_pairs::input::{map_key, should_quit, GridCursor};
use tui_pairs::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_pairs::types::{GameAction, TICK_MS};

/// Asset directory, relative to the working directory.
const ASSET_DIR: &str = "assets";

fn main() -> Result<()> {
    // Assets load before the terminal flips modes, so a missing file aborts
    // with a readable error instead of a garbled screen.
    let mut sounds = SoundBank::load(Path::new(ASSET_DIR))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut sounds);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed from wall-clock entropy so layouts differ run to run.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, sounds: &mut dyn CuePlayer) -> Result<()> {
    let mut session = GameSession::new(entropy_seed());
    let mut cursor = GridCursor::new();
    let view = BoardView::default();

    let mut snapshot = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        let hover = if session.is_over() {
            None
        } else {
            Some(cursor.index())
        };
        view.render_into(&snapshot, hover, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match map_key(key) {
                        Some(GameAction::Flip) => {
                            session.select(cursor.index());
                        }
                        Some(GameAction::Restart) => {
                            session = GameSession::new(entropy_seed());
                            cursor = GridCursor::new();
                        }
                        Some(action) => {
                            cursor.apply(action);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }

        for cue in session.take_cues() {
            sounds.play(cue);
        }
    }
}
