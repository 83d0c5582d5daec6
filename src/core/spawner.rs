//! Time-gated pipe spawning.

use super::constants::PIPE_FREQUENCY_MS;
use super::pipe::Pipe;
use rand::Rng;
use std::time::Duration;

/// Tracks wall-clock time since the last spawn. The session feeds it real
/// frame deltas, so a slow frame does not delay the next pipe.
#[derive(Debug, Clone)]
pub struct PipeSpawner {
    interval: Duration,
    since_last_spawn: Duration,
}

impl Default for PipeSpawner {
    fn default() -> Self {
        Self::new(Duration::from_millis(PIPE_FREQUENCY_MS))
    }
}

impl PipeSpawner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            since_last_spawn: Duration::ZERO,
        }
    }

    pub fn since_last_spawn(&self) -> Duration {
        self.since_last_spawn
    }

    /// Restart the spawn timer.
    pub fn reset(&mut self) {
        self.since_last_spawn = Duration::ZERO;
    }

    /// Advance the timer by `elapsed`. Once the interval has been strictly
    /// exceeded, spawn one pipe at `speed` and reset the timer.
    pub fn advance<R: Rng>(&mut self, elapsed: Duration, speed: f64, rng: &mut R) -> Option<Pipe> {
        self.since_last_spawn += elapsed;
        if self.since_last_spawn > self.interval {
            self.reset();
            Some(Pipe::spawn(speed, rng))
        } else {
            None
        }
    }
}
