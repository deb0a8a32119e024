//! Service layer for business logic.
//!
//! Separates reader logic from UI handlers so it can be tested without a window.

pub mod reader_service;

pub use reader_service::{
    PageView, ReaderEvent, ReaderKey, ReaderService, StatusLine, ViewUpdate, select_folder,
};
