//! State management for the manga reader.

use crate::services::ReaderService;
use std::cell::RefCell;
use std::rc::Rc;

pub mod display_mode;
pub mod navigation;

pub use display_mode::{DisplayMode, Palette, Rgb};
pub use navigation::{Direction, NavigationState};

/// Application-wide state container.
///
/// Every callback runs on the Slint event loop thread, so the session is shared
/// through `Rc<RefCell<_>>` rather than a lock.
pub struct AppState {
    pub reader: Rc<RefCell<ReaderService>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            reader: Rc::new(RefCell::new(ReaderService::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
