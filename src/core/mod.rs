//! Simulation core: entities, collision, spawning and the game state machine.

pub mod bird;
pub mod collision;
pub mod constants;
pub mod pipe;
pub mod session;
pub mod spawner;

pub use bird::Bird;
pub use collision::{check_collision, score_passed_pipes, Progress};
pub use pipe::Pipe;
pub use session::{GameInput, GamePhase, GameSession, InputResult, SessionEvent, SessionView};
pub use spawner::PipeSpawner;
