//! Per-folder reading history stored as a JSON sidecar.
//!
//! The file lives at `<root>/reading_history.json` and maps folder-root paths to
//! the last page index viewed there. Entries for other roots are kept as-is.

use crate::config::HISTORY_FILE_NAME;
use crate::error::{AppError, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Mapping from root folder to last viewed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingHistory {
    entries: BTreeMap<String, usize>,
}

/// Key under which a root folder is recorded.
pub fn history_key(root: &Path) -> String {
    root.to_string_lossy().into_owned()
}

/// Location of the history file for a root folder.
pub fn history_path(root: &Path) -> PathBuf {
    root.join(HISTORY_FILE_NAME)
}

impl ReadingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the history for `root`, falling back to an empty history on any failure.
    pub fn load(root: &Path) -> Self {
        let path = history_path(root);
        if !path.exists() {
            debug!("No reading history at {}", path.display());
            return Self::new();
        }

        match Self::read_from(&path) {
            Ok(history) => {
                debug!(
                    "Loaded {} history entries from {}",
                    history.entries.len(),
                    path.display()
                );
                history
            }
            Err(e) => {
                warn!("{} ({}), starting with empty history", e, path.display());
                Self::new()
            }
        }
    }

    fn read_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| AppError::HistoryRead(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| AppError::HistoryRead(e.to_string()))
    }

    /// Overwrites `<root>/reading_history.json` with the full mapping.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = history_path(root);

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| AppError::HistoryWrite(e.to_string()))?;

        fs::write(&path, buffer).map_err(|e| AppError::HistoryWrite(e.to_string()))?;
        info!("Saved reading history to {}", path.display());
        Ok(())
    }

    pub fn get(&self, root: &Path) -> Option<usize> {
        self.entries.get(&history_key(root)).copied()
    }

    pub fn set(&mut self, root: &Path, cursor: usize) {
        self.entries.insert(history_key(root), cursor);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty_history() {
        let dir = tempdir().unwrap();
        assert!(ReadingHistory::load(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_file_is_empty_history() {
        let dir = tempdir().unwrap();
        fs::write(history_path(dir.path()), "{ \"truncated\": ").unwrap();
        assert!(ReadingHistory::load(dir.path()).is_empty());
    }

    #[test]
    fn wrong_shape_is_empty_history() {
        let dir = tempdir().unwrap();
        fs::write(history_path(dir.path()), "[1, 2, 3]").unwrap();
        assert!(ReadingHistory::load(dir.path()).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut history = ReadingHistory::new();
        history.set(dir.path(), 7);
        history.save(dir.path()).unwrap();

        let loaded = ReadingHistory::load(dir.path());
        assert_eq!(loaded.get(dir.path()), Some(7));
        assert_eq!(loaded, history);
    }

    #[test]
    fn entries_for_other_roots_survive_rewrite() {
        let dir = tempdir().unwrap();
        fs::write(
            history_path(dir.path()),
            "{\n    \"/some/other/root\": 3\n}",
        )
        .unwrap();

        let mut history = ReadingHistory::load(dir.path());
        history.set(dir.path(), 1);
        history.save(dir.path()).unwrap();

        let reloaded = ReadingHistory::load(dir.path());
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(Path::new("/some/other/root")), Some(3));
        assert_eq!(reloaded.get(dir.path()), Some(1));
    }

    #[test]
    fn file_is_pretty_printed_object() {
        let dir = tempdir().unwrap();
        let mut history = ReadingHistory::new();
        history.set(Path::new("/manga/vol1"), 4);
        history.save(dir.path()).unwrap();

        let text = fs::read_to_string(history_path(dir.path())).unwrap();
        assert_eq!(text, "{\n    \"/manga/vol1\": 4\n}");
    }

    #[test]
    fn save_into_missing_folder_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        let result = ReadingHistory::new().save(&missing);
        assert!(matches!(result, Err(AppError::HistoryWrite(_))));
    }
}
