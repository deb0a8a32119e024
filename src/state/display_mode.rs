//! Light/dark display mode and the palette each one selects.

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const WHITE: Rgb = Rgb(255, 255, 255);

/// Colours applied to the window while dark mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColors {
    pub window: Rgb,
    pub window_text: Rgb,
    pub base: Rgb,
    pub button: Rgb,
}

pub const DARK_PALETTE: PaletteColors = PaletteColors {
    window: Rgb(53, 53, 53),
    window_text: WHITE,
    base: Rgb(25, 25, 25),
    button: Rgb(53, 53, 53),
};

/// Active palette: either the toolkit's own or a fixed set of colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    PlatformDefault,
    Custom(PaletteColors),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    #[cfg(test)]
    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            DisplayMode::Light => Palette::PlatformDefault,
            DisplayMode::Dark => Palette::Custom(DARK_PALETTE),
        }
    }
}
