//! Applies session output to the window.

use crate::image_loader;
use crate::services::{PageView, ViewUpdate};
use crate::ui::{set_palette, set_status};
use slint::ComponentHandle;

/// Shows a rendered page, or clears the display area when it failed to decode.
pub fn show_page(ui: &crate::AppWindow, view: &PageView) {
    let view_state = ui.global::<crate::ViewState>();
    match &view.image {
        Some(image) => {
            view_state.set_page_image(image_loader::create_slint_image(image));
            view_state.set_image_loaded(true);
        }
        None => {
            view_state.set_page_image(slint::Image::default());
            view_state.set_image_loaded(false);
        }
    }
    set_status(ui, &view.status);
}

pub fn apply_update(ui: &crate::AppWindow, update: &ViewUpdate) {
    match update {
        ViewUpdate::Page(view) => show_page(ui, view),
        ViewUpdate::Status(status) => set_status(ui, status),
        ViewUpdate::Palette(palette) => set_palette(ui, *palette),
    }
}
