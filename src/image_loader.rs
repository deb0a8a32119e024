use crate::error::Result;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Resampling filter used when fitting a page into the display area.
const SCALE_FILTER: FilterType = FilterType::CatmullRom;

/// Decodes an image file on the calling thread.
pub fn load_image_blocking(path: &Path) -> Result<DynamicImage> {
    let img = image::ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;
    Ok(img)
}

/// Largest size with the source aspect ratio that fits inside `area`.
///
/// Never returns a zero dimension.
pub fn fit_within(source: (u32, u32), area: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = (source.0.max(1) as f64, source.1.max(1) as f64);
    let (area_w, area_h) = (area.0.max(1) as f64, area.1.max(1) as f64);

    let scale = (area_w / src_w).min(area_h / src_h);
    let width = (src_w * scale).round().clamp(1.0, area_w) as u32;
    let height = (src_h * scale).round().clamp(1.0, area_h) as u32;
    (width, height)
}

/// Scales a decoded page to fit the display area, preserving its aspect ratio.
pub fn scale_to_fit(image: &DynamicImage, area: (u32, u32)) -> RgbImage {
    let (width, height) = fit_within((image.width(), image.height()), area);
    if (width, height) == (image.width(), image.height()) {
        return image.to_rgb8();
    }
    image.resize_exact(width, height, SCALE_FILTER).to_rgb8()
}

/// Converts RGB8 pixel data into a Slint image.
pub fn create_slint_image(image: &RgbImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(image.as_raw(), image.width(), image.height());
    Image::from_rgb8(buffer)
}
