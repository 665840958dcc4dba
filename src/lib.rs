//! Render images in the terminal as Braille glyphs colored with the
//! 256-color ANSI palette.
//!
//! The pipeline resizes the image to fit a character budget, then derives two
//! views of it: a black/white bitmap at full resolution that picks the dots of
//! each glyph, and a palette index per 2x4 cell that picks its color.

pub mod color;
pub mod config;
pub mod error;
pub mod luma;
pub mod palette;
pub mod render;
pub mod resize;

use std::io::Write;
use std::path::Path;

use image::RgbImage;

pub use color::ColorGrid;
pub use config::{Config, DEFAULT_MAX_CHARS};
pub use error::{Error, Result};
pub use luma::LumaBitmap;

/// Decode an image file into 8-bit RGB. Any alpha channel is dropped.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Resize `image` to the width budget and derive its dot and color grids.
pub fn convert(image: &RgbImage, max_chars: u32) -> (LumaBitmap, ColorGrid) {
    let resized = resize::resize(image, max_chars);
    log::debug!(
        "source {}x{}, resized {}x{}",
        image.width(),
        image.height(),
        resized.width(),
        resized.height()
    );

    let luma = luma::extract_luma(&resized);
    let colors = color::reduce(&resized);
    log::debug!("{}x{} character cells", colors.width(), colors.height());
    (luma, colors)
}

/// Load, convert and render one image file.
pub fn run<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<()> {
    let image = load_image(path)?;
    let (luma, colors) = convert(&image, config.max_chars);
    render::render(&luma, &colors, out)
}
