//! UI module: a thin adapter between Slint callbacks and the reader session.
//!
//! Threading model: everything runs on the Slint event loop thread.
//! `slint::spawn_local` is used only to await the native folder and
//! confirmation dialogs without blocking the loop.

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{open_folder, setup_handlers};
pub use state_helpers::*;
