use std::time::Duration;

// Playfield (world units are pixels of the 400x600 reference screen)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 50.0;

// Bird physics
pub const GRAVITY: f64 = 0.25;
pub const FLAP_STRENGTH: f64 = -7.0; // velocity override, not an impulse
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = SCREEN_HEIGHT / 2.0;
pub const BIRD_RADIUS: f64 = 15.0;
pub const WING_PHASE_TICKS: u32 = 10;
pub const WING_PHASES: u8 = 3;

// Pipes
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_MARGIN: u32 = 100; // minimum height of each pipe segment
pub const BASE_PIPE_SPEED: f64 = 3.0;
pub const DIFFICULTY_INCREASE: f64 = 0.1; // speed gained per point
pub const PIPE_FREQUENCY_MS: u64 = 1500;

// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;
pub const FRAME: Duration = Duration::from_micros(16_667); // one tick at 60 Hz

// Persistence
pub const DATA_DIR_NAME: &str = ".flappy";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const LOG_FILE: &str = "flappy.log";
