//! File-backed high score persistence
//!
//! The entire file is a single non-negative decimal integer. A missing or
//! unreadable file means "no high score yet"; write failures are logged and
//! swallowed, since losing one update is not gameplay-critical.

use std::fs;
use std::path::{Path, PathBuf};

/// Default location, next to the working directory like the save files of
/// small arcade games
pub const DEFAULT_PATH: &str = "highscore.txt";

/// Persisted best score, single-process single-writer
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Load the store, defaulting to 0 when the file is absent or corrupt
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_score(&path);
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished run. Only a strictly better score is persisted;
    /// the stored value never decreases.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match fs::write(&self.path, self.best.to_string()) {
            Ok(()) => log::info!("high score {} saved to {}", self.best, self.path.display()),
            Err(e) => log::warn!(
                "failed to write high score to {}: {}",
                self.path.display(),
                e
            ),
        }
        true
    }
}

fn read_score(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(contents) => match contents.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("loaded high score {} from {}", score, path.display());
                score
            }
            Err(e) => {
                log::warn!("ignoring corrupt high score file {}: {}", path.display(), e);
                0
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no high score file at {}, starting fresh", path.display());
            0
        }
        Err(e) => {
            log::warn!("failed to read high score file {}: {}", path.display(), e);
            0
        }
    }
}
