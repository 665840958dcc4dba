use image::RgbImage;

use crate::palette::{self, BLACK_WHITE};

/// One on/off bit per pixel. Drives which Braille dots are lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBitmap {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl LumaBitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        self.bits[(y * self.width + x) as usize] = on;
    }
}

/// Classify every pixel as black or white, whichever is nearer.
///
/// Runs at full resolution, before any color simplification.
pub fn extract_luma(image: &RgbImage) -> LumaBitmap {
    let (width, height) = image.dimensions();
    let mut luma = LumaBitmap::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        luma.set(x, y, palette::nearest(&BLACK_WHITE, pixel.0) == 1);
    }
    luma
}
