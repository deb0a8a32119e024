//! Event handlers for UI callbacks.
//!
//! Each Logic callback is translated into a [`ReaderEvent`] and handed to the
//! session; the returned update is applied to the window. Folder selection is
//! the only asynchronous path, because the native dialogs are awaited on the
//! event loop with `slint::spawn_local`. The session keeps serving the old
//! folder until the resume prompt is answered.

use crate::services::{ReaderEvent, ReaderKey, ReaderService, select_folder};
use crate::state::AppState;
use crate::ui::image_display::{apply_update, show_page};
use crate::ui::{clear_page, set_error_with_prefix};
use log::{debug, info};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

type SharedReader = Rc<RefCell<ReaderService>>;

fn dispatch(ui: &slint::Weak<crate::AppWindow>, reader: &SharedReader, event: ReaderEvent) {
    debug!("Dispatching {:?}", event);
    let update = reader.borrow_mut().dispatch(event);

    if let (Some(update), Some(ui)) = (update, ui.upgrade()) {
        apply_update(&ui, &update);
    }
}

async fn confirm_resume(page: usize) -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Resume Reading")
        .set_description(format!("Resume from page {}?", page + 1))
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;
    matches!(answer, MessageDialogResult::Yes)
}

async fn load_and_show_folder(ui: slint::Weak<crate::AppWindow>, reader: SharedReader, root: PathBuf) {
    let view = select_folder(&reader, &root, confirm_resume).await;

    let Some(ui) = ui.upgrade() else {
        return;
    };
    match view {
        Some(view) => show_page(&ui, &view),
        None => clear_page(&ui),
    }
}

/// Converts a logical length reported by Slint into physical pixels.
fn to_physical(length: f32, scale_factor: f32) -> f32 {
    length * scale_factor
}

/// Opens `root` as the reading folder, prompting to resume when history exists.
pub fn open_folder(ui: slint::Weak<crate::AppWindow>, reader: SharedReader, root: PathBuf) {
    let ui_for_error = ui.clone();
    if let Err(e) = slint::spawn_local(load_and_show_folder(ui, reader, root)) {
        if let Some(ui) = ui_for_error.upgrade() {
            set_error_with_prefix(&ui, "Failed to open folder", e.to_string());
        }
    }
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    let logic = ui.global::<crate::Logic>();

    // Folder selection: AsyncFileDialog must run on the main thread
    logic.on_choose_folder({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let reader = reader.clone();
            let result = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new()
                    .set_title("Select Volume Folder")
                    .pick_folder()
                    .await
                else {
                    debug!("Folder selection cancelled");
                    return;
                };

                let root = folder.path().to_path_buf();
                info!("Folder selected: {}", root.display());
                load_and_show_folder(ui_handle, reader, root).await;
            });

            if let Err(e) = result {
                log::error!("Failed to start folder dialog: {}", e);
            }
        }
    });

    logic.on_next_page({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move || dispatch(&ui_handle, &reader, ReaderEvent::Next)
    });

    logic.on_previous_page({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move || dispatch(&ui_handle, &reader, ReaderEvent::Previous)
    });

    logic.on_jump_to_page({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move |text| dispatch(&ui_handle, &reader, ReaderEvent::JumpTo(text.to_string()))
    });

    logic.on_toggle_dark_mode({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move || dispatch(&ui_handle, &reader, ReaderEvent::ToggleDarkMode)
    });

    logic.on_viewport_resized({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move |width, height| {
            let scale_factor = ui_handle
                .upgrade()
                .map(|ui| ui.window().scale_factor())
                .unwrap_or(1.0);
            let event = ReaderEvent::Resized {
                width: to_physical(width, scale_factor),
                height: to_physical(height, scale_factor),
            };
            dispatch(&ui_handle, &reader, event)
        }
    });

    logic.on_key_pressed({
        let ui_handle = ui.as_weak();
        let reader = state.reader.clone();
        move |key| {
            let key = ReaderKey::from_name(key.as_str());
            dispatch(&ui_handle, &reader, ReaderEvent::Key(key))
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_are_scaled_to_physical_pixels() {
        assert_eq!(to_physical(450.0, 2.0), 900.0);
        assert_eq!(to_physical(300.0, 1.0), 300.0);
        assert_eq!(to_physical(100.0, 1.5), 150.0);
    }
}
