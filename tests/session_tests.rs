//! Integration tests for the session lifecycle through the public facade.

use tui_flappy::core::Session;
use tui_flappy::types::{
    Difficulty, GameAction, SessionEvent, SessionPhase, ENTITY_START_Y, FIELD_WIDTH, TICK_MS,
};

#[test]
fn test_full_lifecycle_start_playing_game_over_start() {
    let mut session = Session::new(12345, 0);
    assert_eq!(session.phase(), SessionPhase::Start);

    session.handle_press(Some(GameAction::Select(Difficulty::Medium)));
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.difficulty(), Some(Difficulty::Medium));

    // No flaps: gravity ends the run well within a few seconds of ticks.
    let mut ended = false;
    for _ in 0..10_000 {
        if session.tick().contains(&SessionEvent::GameOver) {
            ended = true;
            break;
        }
    }
    assert!(ended);
    assert_eq!(session.phase(), SessionPhase::GameOver);

    // Any input dismisses the game-over screen.
    session.handle_press(Some(GameAction::Flap));
    assert_eq!(session.phase(), SessionPhase::Start);
    assert_eq!(session.difficulty(), None);
}

#[test]
fn test_tick_rate_constant_matches_sixty_hertz() {
    assert_eq!(TICK_MS, 16);
}

#[test]
fn test_free_fall_descends_quadratically() {
    let mut session = Session::new(1, 0);
    session.handle_press(Some(GameAction::Select(Difficulty::Easy)));
    let gravity = Difficulty::Easy.params().gravity;

    for n in 1..=20u32 {
        session.tick();
        // After n ticks of free fall: y = y0 + g * n(n+1)/2.
        let expected = ENTITY_START_Y + gravity * (n * (n + 1)) as f32 / 2.0;
        let actual = session.run().unwrap().bird().position_y();
        assert!(
            (actual - expected).abs() < 1e-3,
            "tick {n}: expected {expected}, got {actual}"
        );
    }
}

#[test]
fn test_flapping_regularly_keeps_the_run_alive() {
    let mut session = Session::new(7, 0);
    session.handle_press(Some(GameAction::Select(Difficulty::Easy)));

    // One flap roughly every three-quarters of a second holds the bird in a
    // band around its start height without reaching the ceiling.
    for tick in 0..180u32 {
        if tick % 46 == 0 {
            session.handle_press(Some(GameAction::Flap));
        }
        let events = session.tick();
        assert!(
            !events.contains(&SessionEvent::GameOver),
            "died at tick {tick}"
        );
    }
    assert_eq!(session.phase(), SessionPhase::Playing);
}

#[test]
fn test_each_difficulty_starts_with_one_obstacle_at_right_edge() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut session = Session::new(99, 0);
        session.handle_press(Some(GameAction::Select(difficulty)));
        let track = session.run().unwrap().track();
        assert_eq!(track.obstacles().len(), 1);
        assert_eq!(track.obstacles()[0].x, FIELD_WIDTH);
    }
}

#[test]
fn test_obstacle_scrolls_left_at_difficulty_speed() {
    let mut session = Session::new(3, 0);
    session.handle_press(Some(GameAction::Select(Difficulty::Hard)));
    let speed = Difficulty::Hard.params().scroll_speed;

    for _ in 0..10 {
        session.tick();
    }
    let x = session.run().unwrap().track().obstacles()[0].x;
    assert!((x - (FIELD_WIDTH - 10.0 * speed)).abs() < 1e-3);
}

#[test]
fn test_sessions_with_equal_seeds_are_deterministic() {
    let mut a = Session::new(777, 0);
    let mut b = Session::new(777, 0);
    a.handle_press(Some(GameAction::Select(Difficulty::Medium)));
    b.handle_press(Some(GameAction::Select(Difficulty::Medium)));

    for tick in 0..500 {
        if tick % 40 == 0 {
            a.handle_press(Some(GameAction::Flap));
            b.handle_press(Some(GameAction::Flap));
        }
        let ea = a.tick();
        let eb = b.tick();
        assert_eq!(ea, eb, "event streams diverged at tick {tick}");
        assert_eq!(a.phase(), b.phase());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_toggles_survive_runs_and_restarts() {
    let mut session = Session::new(5, 0);
    session.handle_press(Some(GameAction::ToggleRain));
    session.handle_press(Some(GameAction::SetDarkTheme(true)));

    session.handle_press(Some(GameAction::Select(Difficulty::Hard)));
    for _ in 0..10_000 {
        if session.phase() == SessionPhase::GameOver {
            break;
        }
        session.tick();
    }
    session.handle_press(None);
    assert_eq!(session.phase(), SessionPhase::Start);
    assert!(session.toggles().rain);
    assert!(session.toggles().dark);
}
