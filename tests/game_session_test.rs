//! Integration test: game session flow
//!
//! Drives `GameSession` through whole rounds the way the binary does:
//! inputs go through the key mapping, time advances in 60 Hz ticks, and a
//! seeded RNG keeps pipe placement reproducible.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flappy::core::bird::Bird;
use flappy::core::collision::check_collision;
use flappy::core::pipe::Pipe;
use flappy::input::map_key;
use flappy::{
    GameInput, GamePhase, GameSession, InputResult, MemoryHighScore, SessionEvent,
    BASE_PIPE_SPEED, DIFFICULTY_INCREASE, FRAME, GRAVITY, PIPE_GAP, SCREEN_HEIGHT,
    TICKS_PER_SECOND,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

type TestSession = GameSession<ChaCha8Rng, MemoryHighScore>;

fn new_session(seed: u64, high_score: u32) -> TestSession {
    GameSession::new(
        ChaCha8Rng::seed_from_u64(seed),
        MemoryHighScore::with_score(high_score),
    )
}

/// Feed a key through the same mapping the binary uses.
fn press(session: &mut TestSession, code: KeyCode) -> InputResult {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match map_key(key, session.phase) {
        Some(input) => session.handle_input(input).0,
        None => InputResult::Continue,
    }
}

/// Keep the bird centred in the gap of the nearest pipe ahead of it, the
/// way a perfect player would. Returns all events produced.
fn autopilot(session: &mut TestSession, frames: u32) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        if session.phase != GamePhase::Playing {
            break;
        }
        let target = session
            .pipes
            .iter()
            .find(|p| p.right() >= session.bird.left())
            .map(|p| p.top_height + PIPE_GAP / 2.0)
            .unwrap_or(SCREEN_HEIGHT / 2.0);
        // Pin the bird to the target and hold it still; only the
        // scrolling and scoring rules are under test here.
        session.bird.y = target - GRAVITY;
        session.bird.velocity = -GRAVITY;
        events.extend(session.tick(FRAME));
    }
    events
}

// =============================================================================
// Phase transitions
// =============================================================================

#[test]
fn test_space_begins_then_flaps() {
    let mut session = new_session(1, 0);
    assert_eq!(session.phase, GamePhase::Start);

    press(&mut session, KeyCode::Char(' '));
    assert_eq!(session.phase, GamePhase::Playing);
    assert!(session.bird.velocity.abs() < f64::EPSILON);

    press(&mut session, KeyCode::Char(' '));
    assert!(session.bird.velocity < 0.0);
}

#[test]
fn test_quit_key_ends_session_from_start() {
    let mut session = new_session(1, 0);
    assert_eq!(press(&mut session, KeyCode::Char('q')), InputResult::Quit);
}

#[test]
fn test_full_round_then_restart_with_r() {
    let mut session = new_session(2, 0);
    press(&mut session, KeyCode::Char(' '));

    let mut frames = 0;
    while session.phase == GamePhase::Playing && frames < 1000 {
        session.tick(FRAME);
        frames += 1;
    }
    assert_eq!(session.phase, GamePhase::GameOver);

    // Unmapped keys are ignored once grounded.
    assert_eq!(press(&mut session, KeyCode::Char('x')), InputResult::Continue);
    assert_eq!(session.phase, GamePhase::GameOver);

    press(&mut session, KeyCode::Char('r'));
    assert_eq!(session.phase, GamePhase::Playing);
}

// =============================================================================
// Scoring and difficulty
// =============================================================================

#[test]
fn test_perfect_flight_scores_and_speeds_up() {
    let mut session = new_session(3, 0);
    session.handle_input(GameInput::Begin);

    let events = autopilot(&mut session, 60 * 30);

    assert_eq!(session.phase, GamePhase::Playing, "autopilot should never crash");
    assert!(session.score() >= 10, "score was {}", session.score());

    let expected_speed = BASE_PIPE_SPEED + DIFFICULTY_INCREASE * session.score() as f64;
    assert!((session.pipe_speed() - expected_speed).abs() < 1e-9);

    // Speed only ever goes up, one increment per passed pipe.
    let mut last_speed = BASE_PIPE_SPEED;
    let mut last_score = 0;
    for event in &events {
        if let SessionEvent::PipePassed { score, pipe_speed } = *event {
            assert_eq!(score, last_score + 1);
            assert!((pipe_speed - last_speed - DIFFICULTY_INCREASE).abs() < 1e-9);
            last_speed = pipe_speed;
            last_score = score;
        }
    }
}

#[test]
fn test_each_pipe_keeps_its_spawn_speed() {
    let mut session = new_session(4, 0);
    session.handle_input(GameInput::Begin);

    let events = autopilot(&mut session, 60 * 20);

    let spawn_speeds: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::PipeSpawned { speed, .. } => Some(*speed),
            _ => None,
        })
        .collect();
    assert!(spawn_speeds.len() > 5);
    assert!(spawn_speeds.windows(2).all(|w| w[1] >= w[0]));
    assert!(spawn_speeds.last().unwrap() > &BASE_PIPE_SPEED);

    // Live pipes still carry the speed they spawned with.
    for pipe in &session.pipes {
        assert!(spawn_speeds.iter().any(|s| (s - pipe.speed).abs() < 1e-12));
    }
}

#[test]
fn test_spawned_gaps_are_never_degenerate() {
    let mut session = new_session(5, 0);
    session.handle_input(GameInput::Begin);

    for event in autopilot(&mut session, 60 * 30) {
        if let SessionEvent::PipeSpawned { top_height, .. } = event {
            assert!(top_height >= 100.0);
            assert!(SCREEN_HEIGHT - (top_height + PIPE_GAP) >= 100.0);
        }
    }
}

#[test]
fn test_pipes_spawn_every_ninety_ticks_at_sixty_hz() {
    let mut session = new_session(9, 0);
    session.handle_input(GameInput::Begin);

    let mut spawn_ticks = Vec::new();
    let mut first_spacing = None;
    for tick in 1..=6 * TICKS_PER_SECOND {
        let events = autopilot(&mut session, 1);
        if events
            .iter()
            .any(|e| matches!(e, SessionEvent::PipeSpawned { .. }))
        {
            spawn_ticks.push(tick);
            if spawn_ticks.len() == 2 {
                first_spacing = Some(session.pipes[1].x - session.pipes[0].x);
            }
        }
    }
    assert_eq!(spawn_ticks, vec![90, 180, 270, 360]);

    // Both early pipes move at base speed: 90 ticks * 3px apart.
    let spacing = first_spacing.unwrap();
    assert!((spacing - 270.0).abs() < 1e-9, "spacing was {spacing}");
}

#[test]
fn test_same_seed_same_round() {
    let run = |seed| {
        let mut session = new_session(seed, 0);
        session.handle_input(GameInput::Begin);
        autopilot(&mut session, 60 * 10)
    };
    assert_eq!(run(77), run(77));
}

// =============================================================================
// Collision and high score
// =============================================================================

#[test]
fn test_bird_clipping_top_segment_collides() {
    let mut bird = Bird::new();
    let mut pipe = Pipe::with_top_height(BASE_PIPE_SPEED, 250.0);
    pipe.x = bird.x - 20.0;
    bird.y = 260.0; // top edge at 245, above the gap
    assert!(check_collision(&bird, &[pipe]));
}

#[test]
fn test_crash_records_high_score_and_restart_resets() {
    let mut session = new_session(6, 3);
    session.handle_input(GameInput::Begin);
    autopilot(&mut session, 60 * 12);
    let score = session.score();
    assert!(score > 3);

    // Dive into the ground.
    let mut crash = None;
    while session.phase == GamePhase::Playing {
        for event in session.tick(FRAME) {
            if let SessionEvent::Crashed { .. } = event {
                crash = Some(event);
            }
        }
    }

    assert!(matches!(
        crash,
        Some(SessionEvent::Crashed {
            new_high_score: true,
            ..
        })
    ));
    assert_eq!(session.high_score, session.score());
    assert_eq!(session.store().high_score, session.score());

    session.handle_input(GameInput::Restart);
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.bird, Bird::new());
    assert!(session.pipes.is_empty());
    assert_eq!(session.score(), 0);
    assert!((session.pipe_speed() - BASE_PIPE_SPEED).abs() < f64::EPSILON);
}

#[test]
fn test_restart_state_is_identical_across_rounds() {
    let mut session = new_session(8, 0);
    session.handle_input(GameInput::Begin);
    let fresh_bird = session.bird.clone();

    for frames in [30, 60 * 5, 60 * 9] {
        autopilot(&mut session, frames);
        session.bird.y = SCREEN_HEIGHT; // force a crash
        session.tick(FRAME);
        assert_eq!(session.phase, GamePhase::GameOver);

        session.handle_input(GameInput::Restart);
        assert_eq!(session.bird, fresh_bird);
        assert!(session.pipes.is_empty());
        assert_eq!(session.score(), 0);
        assert!((session.pipe_speed() - BASE_PIPE_SPEED).abs() < f64::EPSILON);
        assert_eq!(session.spawner.since_last_spawn(), Duration::ZERO);
    }
}
