//! High score persistence in ~/.flappy/.
//!
//! The record is a JSON object with a single field, `{"high_score": 12}`.
//! Anything missing or unreadable loads as zero; write failures are
//! reported to the caller but never interrupt play.

use crate::core::constants::{DATA_DIR_NAME, HIGH_SCORE_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score record is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let home_dir = dirs::home_dir().ok_or(PersistenceError::NoHomeDir)?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read and parse a JSON file.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    load_json(path).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "falling back to default");
        T::default()
    })
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// On-disk shape of the high score record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

/// Durable storage for the single best score.
pub trait HighScoreStore {
    /// The stored high score, or 0 if there is none.
    fn load(&self) -> u32;
    /// Replace the stored high score.
    fn save(&mut self, score: u32) -> Result<(), PersistenceError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        (**self).save(score)
    }
}

/// High score kept in a JSON file.
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default location, ~/.flappy/highscore.json.
    pub fn open_default() -> Result<Self, PersistenceError> {
        Ok(Self::new(data_dir()?.join(HIGH_SCORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        load_json_or_default::<HighScoreRecord>(&self.path).high_score
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        save_json(&self.path, &HighScoreRecord { high_score: score })
    }
}

/// Process-local high score, used when no home directory is available
/// and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    pub high_score: u32,
    /// Number of successful saves.
    pub saves: u32,
}

impl MemoryHighScore {
    pub fn with_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.high_score
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}
