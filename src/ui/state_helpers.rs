//! Helper functions to set groups of ViewState properties together.

use crate::services::StatusLine;
use crate::state::{Palette, Rgb};
use log::error;
use slint::{Color, ComponentHandle};

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb_u8(rgb.0, rgb.1, rgb.2)
}

/// Sets the status line text and its error styling.
pub fn set_status(ui: &crate::AppWindow, status: &StatusLine) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_status_text(status.to_string().into());
    view_state.set_status_is_error(status.is_error());
}

/// Sets an error message in the status line with a prefix.
///
/// Logs the error and updates the ViewState status properties.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    set_status(ui, &StatusLine::Error(error_message));
}

/// Removes the page image and status text.
pub fn clear_page(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_page_image(slint::Image::default());
    view_state.set_image_loaded(false);
    view_state.set_status_text("".into());
    view_state.set_status_is_error(false);
}

/// Sets all palette-related properties at once.
///
/// Groups: custom-palette, window-color, window-text-color, base-color, button-color
pub fn set_palette(ui: &crate::AppWindow, palette: Palette) {
    let view_state = ui.global::<crate::ViewState>();
    match palette {
        Palette::PlatformDefault => view_state.set_custom_palette(false),
        Palette::Custom(colors) => {
            view_state.set_window_color(to_color(colors.window));
            view_state.set_window_text_color(to_color(colors.window_text));
            view_state.set_base_color(to_color(colors.base));
            view_state.set_button_color(to_color(colors.button));
            view_state.set_custom_palette(true);
        }
    }
}
