use image::{RgbImage, imageops::FilterType};

/// Filter used for every downscale. Cubic, so edges stay smooth.
pub const FILTER: FilterType = FilterType::CatmullRom;

/// Round `n` up to the next multiple of `m`.
pub fn ceil_multiple(n: u32, m: u32) -> u32 {
    n.div_ceil(m) * m
}

/// Fit `image` into `max_chars` Braille cells of width and pad it to whole 2x4 cells.
pub fn resize(image: &RgbImage, max_chars: u32) -> RgbImage {
    let max_width = max_chars.saturating_mul(2);
    let (width, height) = image.dimensions();

    if width > max_width && height > 0 {
        // Round to the nearest row, but keep at least one.
        let scaled =
            (u64::from(max_width) * u64::from(height) + u64::from(width) / 2) / u64::from(width);
        let new_height = (scaled as u32).max(1);
        log::debug!("scaling {}x{} down to {}x{}", width, height, max_width, new_height);
        let scaled = image::imageops::resize(image, max_width, new_height, FILTER);
        pad_to_cells(&scaled)
    } else {
        pad_to_cells(image)
    }
}

/// Extend the image to a width multiple of 2 and a height multiple of 4 by
/// repeating its last column and row.
pub fn pad_to_cells(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return RgbImage::new(ceil_multiple(width, 2), ceil_multiple(height, 4));
    }

    let padded_width = ceil_multiple(width, 2);
    let padded_height = ceil_multiple(height, 4);
    if (padded_width, padded_height) == (width, height) {
        return image.clone();
    }

    RgbImage::from_fn(padded_width, padded_height, |x, y| {
        *image.get_pixel(x.min(width - 1), y.min(height - 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 7) as u8, (y * 5) as u8, 100]))
    }

    #[test]
    fn test_ceil_multiple() {
        assert_eq!(ceil_multiple(0, 4), 0);
        assert_eq!(ceil_multiple(1, 4), 4);
        assert_eq!(ceil_multiple(4, 4), 4);
        assert_eq!(ceil_multiple(5, 2), 6);
    }

    #[test]
    fn test_small_image_is_only_padded() {
        let img = gradient(5, 6);
        let out = resize(&img, 160);
        assert_eq!(out.dimensions(), (6, 8));
        for y in 0..6 {
            for x in 0..5 {
                assert_eq!(out.get_pixel(x, y), img.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_padding_repeats_edges() {
        let img = gradient(3, 1);
        let out = pad_to_cells(&img);
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get_pixel(3, 0), img.get_pixel(2, 0));
        assert_eq!(out.get_pixel(1, 3), img.get_pixel(1, 0));
        assert_eq!(out.get_pixel(3, 3), img.get_pixel(2, 0));
    }

    #[test]
    fn test_aligned_image_unchanged() {
        let img = gradient(8, 12);
        assert_eq!(resize(&img, 4), img);
    }

    #[test]
    fn test_wide_image_scaled_to_budget() {
        let img = gradient(100, 50);
        let out = resize(&img, 10);
        // 20 wide, 10 tall before padding
        assert_eq!(out.dimensions(), (20, 12));
    }

    #[test]
    fn test_aspect_ratio_rounding() {
        // 30 * 7 / 100 = 2.1 rows
        let img = gradient(100, 7);
        let out = resize(&img, 15);
        assert_eq!(out.width(), 30);
        assert_eq!(out.height(), 4);

        // 10 * 33 / 20 = 16.5, rounds up to 17, pads to 20
        let img = gradient(20, 33);
        let out = resize(&img, 5);
        assert_eq!(out.dimensions(), (10, 20));
    }

    #[test]
    fn test_very_flat_image_keeps_a_row() {
        let img = gradient(1000, 1);
        let out = resize(&img, 10);
        assert_eq!(out.dimensions(), (20, 4));
    }

    #[test]
    fn test_zero_area_does_not_panic() {
        assert_eq!(resize(&RgbImage::new(0, 0), 160).dimensions(), (0, 0));
        assert_eq!(resize(&RgbImage::new(0, 3), 160).dimensions(), (0, 4));
        assert_eq!(resize(&RgbImage::new(3, 0), 160).dimensions(), (4, 0));
    }
}
