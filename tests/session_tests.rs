//! Scenario tests for the selection state machine and the two clocks

use tui_pairs::core::{GameSession, SelectOutcome, SelectionPhase};
use tui_pairs::types::{
    Cue, Outcome, TileFace, GAME_TIME_SECS, HIDE_DELAY_MS, TIME_WARNING_SECS,
};

/// Slot indices of both tiles holding `face`.
fn pair_of(session: &GameSession, face: TileFace) -> (usize, usize) {
    let mut slots = session
        .board()
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, t)| t.face() == face)
        .map(|(i, _)| i);
    (slots.next().unwrap(), slots.next().unwrap())
}

/// Complete every pair in face order; wins in exactly six moves.
fn play_perfect_game(session: &mut GameSession) {
    for face in TileFace::ALL {
        let (a, b) = pair_of(session, face);
        session.select(a);
        session.select(b);
    }
}

#[test]
fn match_then_mismatch_scenario() {
    let mut session = GameSession::new(2024);
    let (a1, a2) = pair_of(&session, TileFace::Sun);
    let (b1, _) = pair_of(&session, TileFace::Moon);

    // A then A: match, removed from play.
    session.select(a1);
    assert_eq!(session.select(a2), SelectOutcome::Matched { won: false });
    assert_eq!(session.pairs_found(), 1);
    assert_eq!(session.moves(), 1);
    assert!(session.board().tiles()[a1].is_matched());

    // A then B is impossible now (A is gone), so B then a removed tile:
    // the removed tile select is swallowed, then B with another face.
    assert_eq!(session.select(a1), SelectOutcome::Ignored);
    session.select(b1);
    let (c1, _) = pair_of(&session, TileFace::Heart);
    assert_eq!(session.select(c1), SelectOutcome::Mismatched);
    assert_eq!(session.moves(), 2);
    assert_eq!(session.pairs_found(), 1);

    // After the delay both revert to face-down and stay selectable.
    session.tick(HIDE_DELAY_MS);
    assert!(!session.board().tiles()[b1].is_revealed());
    assert!(!session.board().tiles()[c1].is_revealed());
    assert_eq!(session.select(b1), SelectOutcome::FirstRevealed);
}

#[test]
fn moves_count_only_completed_comparisons() {
    let mut session = GameSession::new(31);
    let (a, _) = pair_of(&session, TileFace::Star);
    let (b, _) = pair_of(&session, TileFace::Clover);
    let (c, _) = pair_of(&session, TileFace::Diamond);

    session.select(a); // first reveal: no move
    session.select(a); // self-click: no move
    assert_eq!(session.moves(), 0);

    session.select(b); // completes a comparison
    assert_eq!(session.moves(), 1);

    session.select(c); // resolving window: ignored
    assert_eq!(session.moves(), 1);

    session.tick(HIDE_DELAY_MS);
    session.select(c);
    assert_eq!(session.moves(), 1, "first reveal of a new round is not a move");
}

#[test]
fn perfect_game_wins_in_six_moves() {
    let mut session = GameSession::new(555);
    play_perfect_game(&mut session);

    assert_eq!(session.outcome(), Some(Outcome::Won { moves: 6 }));
    assert_eq!(session.pairs_found(), 6);
    assert!(session.board().is_cleared());
}

#[test]
fn win_freezes_the_remaining_time() {
    let mut session = GameSession::new(555);
    session.tick(3000);
    let left = session.remaining_secs();
    assert_eq!(left, GAME_TIME_SECS - 3);

    play_perfect_game(&mut session);
    session.tick(30_000);
    assert_eq!(session.remaining_secs(), left);
    assert_eq!(session.outcome(), Some(Outcome::Won { moves: 6 }));
}

#[test]
fn sixty_idle_seconds_lose_exactly_once() {
    let mut session = GameSession::new(7);

    let mut defeats = 0;
    for _ in 0..GAME_TIME_SECS + 5 {
        session.tick(1000);
        defeats += session
            .take_cues()
            .iter()
            .filter(|c| **c == Cue::Defeat)
            .count();
    }

    assert_eq!(defeats, 1);
    assert_eq!(session.outcome(), Some(Outcome::TimedOut));
    assert_eq!(session.remaining_secs(), 0);
}

#[test]
fn countdown_decrements_strictly_once_per_second() {
    let mut session = GameSession::new(7);

    for expected in (0..GAME_TIME_SECS).rev() {
        // Sub-second ticks never step the countdown.
        session.tick(400);
        session.tick(400);
        assert_eq!(session.remaining_secs(), expected + 1);
        session.tick(200);
        assert_eq!(session.remaining_secs(), expected);
    }
    assert_eq!(session.outcome(), Some(Outcome::TimedOut));
}

#[test]
fn warning_cues_start_at_the_threshold() {
    let mut session = GameSession::new(7);
    let quiet_seconds = GAME_TIME_SECS - TIME_WARNING_SECS - 1;
    for _ in 0..quiet_seconds {
        session.tick(1000);
    }
    assert!(session.take_cues().iter().all(|c| *c != Cue::TimeWarning));

    // Crossing into the stretch emits the first warning.
    session.tick(1000);
    assert!(session
        .take_cues()
        .iter()
        .any(|c| *c == Cue::TimeWarning));
}

#[test]
fn hide_delay_does_not_disturb_the_countdown() {
    let mut session = GameSession::new(2024);
    let (a, _) = pair_of(&session, TileFace::Sun);
    let (b, _) = pair_of(&session, TileFace::Moon);

    // Burn 500ms toward the next countdown step, then mismatch.
    session.tick(500);
    session.select(a);
    session.select(b);

    // The hide delay fires at 1000ms; the countdown still steps on its own
    // schedule (500ms later) rather than being reset by the delay.
    session.tick(500);
    assert_eq!(session.remaining_secs(), GAME_TIME_SECS - 1);
    assert!(matches!(
        session.phase(),
        SelectionPhase::Resolving { .. }
    ));

    session.tick(500);
    assert_eq!(session.phase(), SelectionPhase::Idle);
    assert_eq!(session.remaining_secs(), GAME_TIME_SECS - 1);

    session.tick(500);
    assert_eq!(session.remaining_secs(), GAME_TIME_SECS - 2);
}

#[test]
fn mismatch_window_can_end_in_a_loss() {
    let mut session = GameSession::new(2024);
    for _ in 0..GAME_TIME_SECS - 1 {
        session.tick(1000);
    }

    let (a, _) = pair_of(&session, TileFace::Sun);
    let (b, _) = pair_of(&session, TileFace::Moon);
    session.select(a);
    session.select(b);

    // The final second elapses while the mismatch is on display. The hide
    // delay fires in the same tick, just before the loss freezes the session.
    session.tick(1000);
    assert_eq!(session.outcome(), Some(Outcome::TimedOut));
    assert!(!session.board().tiles()[a].is_revealed());
    assert_eq!(session.select(a), SelectOutcome::Ignored);
}
