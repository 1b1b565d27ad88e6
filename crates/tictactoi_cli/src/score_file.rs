//! Score persistence in a small TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoi::{Mark, ScoreError, ScoreStore};
use tracing::{debug, info, instrument};

/// On-disk layout. Key names are kept stable across releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(default)]
    score_x_wins: u32,
    #[serde(default)]
    score_o_wins: u32,
}

/// [`ScoreStore`] backed by a TOML file.
///
/// The file is read once on open and rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
    scores: ScoreFile,
}

impl FileScoreStore {
    /// Opens the store at `path`. A missing file reads as zero wins each.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let path = path.as_ref().to_path_buf();
        let scores = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ScoreError::new(format!("Failed to read score file: {}", e)))?;
            toml::from_str(&content)
                .map_err(|e| ScoreError::new(format!("Failed to parse score file: {}", e)))?
        } else {
            debug!("Score file not found, starting from zero");
            ScoreFile::default()
        };
        Ok(Self { path, scores })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets both totals back to zero and persists them.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn reset(&mut self) -> Result<(), ScoreError> {
        self.scores = ScoreFile::default();
        self.write()?;
        info!("Scores reset");
        Ok(())
    }

    fn write(&self) -> Result<(), ScoreError> {
        let content = toml::to_string(&self.scores)
            .map_err(|e| ScoreError::new(format!("Failed to serialize scores: {}", e)))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ScoreError::new(format!("Failed to create score directory: {}", e)))?;
        }
        std::fs::write(&self.path, content)
            .map_err(|e| ScoreError::new(format!("Failed to write score file: {}", e)))
    }
}

impl ScoreStore for FileScoreStore {
    fn load_score(&self, mark: Mark) -> u32 {
        match mark {
            Mark::First => self.scores.score_x_wins,
            Mark::Second => self.scores.score_o_wins,
        }
    }

    fn save_score(&mut self, mark: Mark, score: u32) -> Result<(), ScoreError> {
        match mark {
            Mark::First => self.scores.score_x_wins = score,
            Mark::Second => self.scores.score_o_wins = score,
        }
        self.write()
    }
}
