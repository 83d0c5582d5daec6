//! The game state machine: Start → Playing → GameOver → Playing.
//!
//! `GameSession` owns all round state plus the injected random source and
//! high score store. The binary feeds it inputs and frame deltas; nothing
//! here touches the terminal or the clock directly.

use super::bird::Bird;
use super::collision::{check_collision, score_passed_pipes, Progress};
use super::constants::BASE_PIPE_SPEED;
use super::pipe::Pipe;
use super::spawner::PipeSpawner;
use crate::utils::persistence::HighScoreStore;
use rand::Rng;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the player to begin.
    Start,
    /// Physics, spawning and collision are live.
    Playing,
    /// Round over, waiting for a restart.
    GameOver,
}

/// Discrete player intents, already mapped from raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Begin,
    Flap,
    Restart,
    Quit,
}

/// Result of handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Things that happened during a tick or transition. The session does not
/// log these itself; the caller decides what to record.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    RoundStarted,
    PipeSpawned { top_height: f64, speed: f64 },
    PipePassed { score: u32, pipe_speed: f64 },
    Crashed { score: u32, new_high_score: bool },
}

/// Borrowed snapshot of everything the renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub phase: GamePhase,
    pub bird: &'a Bird,
    pub pipes: &'a [Pipe],
    pub score: u32,
    pub high_score: u32,
    pub pipe_speed: f64,
    pub clock: Duration,
}

pub struct GameSession<R, S> {
    pub phase: GamePhase,
    pub bird: Bird,
    /// Live pipes in spawn order.
    pub pipes: Vec<Pipe>,
    pub progress: Progress,
    pub spawner: PipeSpawner,
    /// Best score seen, mirrored from the store.
    pub high_score: u32,
    /// Physics ticks in the current round.
    pub round_ticks: u64,
    /// Total wall-clock time fed to the session, drives cosmetic animation.
    pub clock: Duration,
    rng: R,
    store: S,
}

impl<R: Rng, S: HighScoreStore> GameSession<R, S> {
    /// A fresh session on the start screen.
    pub fn new(rng: R, store: S) -> Self {
        let high_score = store.load();
        info!(high_score, "session created");
        Self {
            phase: GamePhase::Start,
            bird: Bird::new(),
            pipes: Vec::new(),
            progress: initial_progress(),
            spawner: PipeSpawner::default(),
            high_score,
            round_ticks: 0,
            clock: Duration::ZERO,
            rng,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn pipe_speed(&self) -> f64 {
        self.progress.pipe_speed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.phase,
            bird: &self.bird,
            pipes: &self.pipes,
            score: self.progress.score,
            high_score: self.high_score,
            pipe_speed: self.progress.pipe_speed,
            clock: self.clock,
        }
    }

    /// Apply one input. Inputs that don't apply to the current phase are
    /// ignored; `Quit` ends the session from any phase.
    pub fn handle_input(&mut self, input: GameInput) -> (InputResult, Vec<SessionEvent>) {
        let mut events = Vec::new();
        match (self.phase, input) {
            (_, GameInput::Quit) => {
                info!(phase = ?self.phase, "quit requested");
                return (InputResult::Quit, events);
            }
            (GamePhase::Start, GameInput::Begin) | (GamePhase::GameOver, GameInput::Restart) => {
                self.start_round();
                events.push(SessionEvent::RoundStarted);
            }
            (GamePhase::Playing, GameInput::Flap) => self.bird.flap(),
            _ => {}
        }
        (InputResult::Continue, events)
    }

    /// Reset every piece of round state and enter Playing.
    fn start_round(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.progress = initial_progress();
        self.spawner.reset();
        self.round_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Advance the simulation by one tick covering `elapsed` wall-clock time.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        self.clock += elapsed;

        let mut events = Vec::new();
        if self.phase != GamePhase::Playing {
            return events;
        }
        self.round_ticks += 1;

        self.bird.tick();

        if let Some(pipe) = self
            .spawner
            .advance(elapsed, self.progress.pipe_speed, &mut self.rng)
        {
            events.push(SessionEvent::PipeSpawned {
                top_height: pipe.top_height,
                speed: pipe.speed,
            });
            self.pipes.push(pipe);
        }

        for pipe in &mut self.pipes {
            pipe.tick();
        }

        if score_passed_pipes(&self.bird, &mut self.pipes, &mut self.progress) > 0 {
            events.push(SessionEvent::PipePassed {
                score: self.progress.score,
                pipe_speed: self.progress.pipe_speed,
            });
        }

        self.pipes.retain(|pipe| !pipe.is_off_screen());

        if check_collision(&self.bird, &self.pipes) {
            events.push(self.crash());
        }

        events
    }

    /// End the round and record a new high score if one was set.
    fn crash(&mut self) -> SessionEvent {
        self.phase = GamePhase::GameOver;
        let score = self.progress.score;
        let new_high_score = score > self.high_score;

        if new_high_score {
            self.high_score = score;
            if let Err(e) = self.store.save(score) {
                warn!(error = %e, score, "could not save high score");
            }
        }

        SessionEvent::Crashed {
            score,
            new_high_score,
        }
    }
}

fn initial_progress() -> Progress {
    Progress {
        score: 0,
        pipe_speed: BASE_PIPE_SPEED,
    }
}
