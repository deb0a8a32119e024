//! Unified error types for the manga reader.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error scanning a folder for image files
    DirectoryScan(String),
    /// Reading history file could not be read or parsed
    HistoryRead(String),
    /// Reading history file could not be written
    HistoryWrite(String),
    /// Jump input that is not a number
    InvalidPageNumber(String),
    /// Jump input outside `1..=total`
    PageOutOfRange { page: i64, total: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
            AppError::HistoryRead(msg) => write!(f, "Failed to read reading history: {}", msg),
            AppError::HistoryWrite(msg) => write!(f, "Failed to save reading history: {}", msg),
            AppError::InvalidPageNumber(input) => write!(f, "Invalid page number: {}", input),
            AppError::PageOutOfRange { page, total } => {
                write!(f, "Page {} is out of range (1-{})", page, total)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
