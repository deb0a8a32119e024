//! Navigation state: the ordered page sequence and the cursor over it.

use log::debug;
use std::path::{Path, PathBuf};

/// Direction for navigation through pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Holds the image sequence of the current root and the zero-based cursor.
///
/// The cursor is `None` exactly when the sequence is empty.
#[derive(Debug, Default)]
pub struct NavigationState {
    image_files: Vec<PathBuf>,
    cursor: Option<usize>,
}

impl NavigationState {
    /// Creates a new empty navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole sequence. The cursor starts on the first page, if any.
    pub fn replace_files(&mut self, files: Vec<PathBuf>) {
        self.cursor = if files.is_empty() { None } else { Some(0) };
        self.image_files = files;
    }

    pub fn clear(&mut self) {
        self.replace_files(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    #[cfg(test)]
    pub fn files(&self) -> &[PathBuf] {
        &self.image_files
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn path_at(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(PathBuf::as_path)
    }

    /// Returns the current file path.
    pub fn current_path(&self) -> Option<&Path> {
        self.cursor.and_then(|index| self.path_at(index))
    }

    /// Moves the cursor. Out-of-range indices leave it untouched.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index < self.len() {
            self.cursor = Some(index);
            true
        } else {
            false
        }
    }

    /// Index one step away in `direction`, without moving the cursor.
    pub fn peek(&self, direction: Direction) -> Option<usize> {
        let current = self.cursor?;
        match direction {
            Direction::Next if current + 1 < self.len() => Some(current + 1),
            Direction::Previous if current > 0 => Some(current - 1),
            _ => {
                debug!("No {:?} page available from index {}", direction, current);
                None
            }
        }
    }
}
