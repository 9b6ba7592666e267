//! Score persistence.
//!
//! The only persisted value is the memory game's best time. It lives in a small
//! versioned JSON key-value file so further scores can be added without a
//! format change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for key '{0}'")]
    InvalidFormat(String),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current score file version.
pub const SCORE_VERSION: u32 = 1;

/// Key of the memory game's best time, in whole seconds.
pub const BEST_TIME_KEY: &str = "memory.bestTime";

/// File name used inside the data directory.
pub const SCORE_FILE_NAME: &str = "scores.json";

/// Storage for the memory game's best time.
pub trait BestTimeStore: Send {
    /// The stored best time, `None` if nothing was stored yet.
    fn load_best_time(&self) -> Result<Option<u32>, PersistError>;

    /// Overwrite the stored best time. Fails without writing when the
    /// existing storage cannot be read.
    fn save_best_time(&mut self, seconds: u32) -> Result<(), PersistError>;
}

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    best_time: Option<u32>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best_time(best_time: u32) -> Self {
        Self {
            best_time: Some(best_time),
            writes: 0,
        }
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BestTimeStore for InMemoryStore {
    fn load_best_time(&self) -> Result<Option<u32>, PersistError> {
        Ok(self.best_time)
    }

    fn save_best_time(&mut self, seconds: u32) -> Result<(), PersistError> {
        self.best_time = Some(seconds);
        self.writes += 1;
        Ok(())
    }
}

/// On-disk layout of the score file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

impl Default for ScoreFile {
    fn default() -> Self {
        Self {
            version: SCORE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// A [`BestTimeStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The score file inside a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SCORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, treating a missing file as empty.
    fn read(&self) -> Result<ScoreFile, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScoreFile::default()),
            Err(e) => return Err(e.into()),
        };
        let file: ScoreFile = serde_json::from_str(&content)?;

        if file.version != SCORE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SCORE_VERSION,
                found: file.version,
            });
        }

        Ok(file)
    }

    fn write(&self, file: &ScoreFile) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(file)?;

        // Replace atomically through a sibling temp file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl BestTimeStore for JsonFileStore {
    fn load_best_time(&self) -> Result<Option<u32>, PersistError> {
        let file = self.read()?;
        let best = match file.entries.get(BEST_TIME_KEY) {
            None => None,
            Some(value) => Some(
                value
                    .as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(|| PersistError::InvalidFormat(BEST_TIME_KEY.to_string()))?,
            ),
        };
        debug!(path = %self.path.display(), ?best, "best time loaded");
        Ok(best)
    }

    fn save_best_time(&mut self, seconds: u32) -> Result<(), PersistError> {
        // A file that cannot be read is left alone.
        let mut file = self.read()?;
        file.entries
            .insert(BEST_TIME_KEY.to_string(), serde_json::Value::from(seconds));
        self.write(&file)?;
        info!(path = %self.path.display(), seconds, "best time saved");
        Ok(())
    }
}
