//! High-score persistence.
//!
//! One scalar survives between processes: the best score, stored as a bare
//! decimal integer in a text file. A missing or unreadable record is the
//! same as no record; load never fails. Writes overwrite the whole file -
//! there is exactly one writer (the frame loop), so no locking is needed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default file name, created in the working directory.
pub const DEFAULT_FILE: &str = "highscore.txt";

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`DEFAULT_FILE`] in the working directory.
    pub fn open_default() -> Self {
        Self::new(DEFAULT_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best score on record, or 0 when there is none (missing file,
    /// unreadable file, garbage content - all recovered locally).
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrite the record with `value`.
    ///
    /// Errors propagate to the caller, which decides whether a failed
    /// write matters; the game treats it as non-fatal.
    pub fn save(&self, value: u32) -> Result<()> {
        fs::write(&self.path, value.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("highscore.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(ScoreStore::new(path).load(), 0);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("highscore.txt"));
        store.save(42).unwrap();
        assert_eq!(store.load(), 42);
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("highscore.txt"));
        store.save(3).unwrap();
        store.save(12).unwrap();
        assert_eq!(store.load(), 12);
    }

    #[test]
    fn test_whitespace_around_value_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "  27\n").unwrap();
        assert_eq!(ScoreStore::new(path).load(), 27);
    }

    #[test]
    fn test_save_into_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("no/such/dir/highscore.txt"));
        assert!(store.save(1).is_err());
    }
}
