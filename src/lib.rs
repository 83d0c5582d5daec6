//! Flappy - terminal arcade game library.
//!
//! Exposes the simulation (bird, pipes, collision, spawning and the game
//! session state machine), high score persistence and the terminal
//! presentation so the binary and the integration tests share them.

pub mod core;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use crate::core::session::{GameInput, GamePhase, GameSession, InputResult, SessionEvent};
pub use crate::utils::persistence::{HighScoreFile, HighScoreStore, MemoryHighScore};
