//! Tracing setup. The terminal is owned by the game screen, so logs go to
//! ~/.flappy/flappy.log instead of stdout.

use super::persistence::{data_dir, PersistenceError};
use crate::core::constants::LOG_FILE;
use crate::core::session::SessionEvent;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Default log location.
pub fn log_path() -> Result<PathBuf, PersistenceError> {
    Ok(data_dir()?.join(LOG_FILE))
}

/// Install the global subscriber, appending plain-text lines to `path`.
pub fn init_file_logging(path: &Path) -> Result<(), PersistenceError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Record one session event. Round boundaries go out at `info`, per-pipe
/// traffic at `debug`.
pub fn log_event(event: &SessionEvent) {
    match *event {
        SessionEvent::RoundStarted => info!("round started"),
        SessionEvent::PipeSpawned { top_height, speed } => {
            debug!(top_height, speed, "pipe spawned")
        }
        SessionEvent::PipePassed { score, pipe_speed } => {
            debug!(score, pipe_speed, "pipe passed")
        }
        SessionEvent::Crashed {
            score,
            new_high_score,
        } => info!(score, new_high_score, "bird crashed"),
    }
}
