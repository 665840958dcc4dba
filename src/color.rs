//! Per-cell color: downsample, strip brightness, quantize to the 256-color palette.

use image::{Rgb, RgbImage};

use crate::palette::{self, PALETTE};
use crate::resize::FILTER;

/// One palette index per character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl ColorGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            indices: vec![0; width as usize * height as usize],
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
    pub fn get(&self, cx: u32, cy: u32) -> u8 {
        self.indices[(cy * self.width + cx) as usize]
    }

    #[inline]
    pub fn set(&mut self, cx: u32, cy: u32, index: u8) {
        self.indices[(cy * self.width + cx) as usize] = index;
    }
}

/// Push a color to full brightness, keeping its channel ratios.
///
/// Black has no hue to keep and becomes white.
pub fn normalize(pixel: Rgb<u8>) -> Rgb<u8> {
    let [r, g, b] = pixel.0;
    let max = r.max(g).max(b) as u32;
    if max == 0 {
        return Rgb([255, 255, 255]);
    }

    let scale = |c: u8| (c as u32 * 255 / max).min(255) as u8;
    Rgb([scale(r), scale(g), scale(b)])
}

/// Reduce a cell-aligned image to one palette index per 2x4 block.
pub fn reduce(image: &RgbImage) -> ColorGrid {
    let (cols, rows) = (image.width() / 2, image.height() / 4);
    let mut grid = ColorGrid::new(cols, rows);
    if cols == 0 || rows == 0 {
        return grid;
    }

    let coarse = image::imageops::resize(image, cols, rows, FILTER);
    for (cx, cy, pixel) in coarse.enumerate_pixels() {
        let normalized = normalize(*pixel);
        grid.set(cx, cy, palette::nearest(&PALETTE, normalized.0));
    }
    grid
}
