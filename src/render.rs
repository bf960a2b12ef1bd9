use crate::image_loader::{HsHistogram, HUE_BINS, SATURATION_BINS};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Side length in pixels of the block drawn for one bin.
pub const BLOCK_SIZE: u32 = 10;
pub const RENDER_WIDTH: u32 = HUE_BINS as u32 * BLOCK_SIZE;
pub const RENDER_HEIGHT: u32 = SATURATION_BINS as u32 * BLOCK_SIZE;

/// Display intensity of a cell relative to the table maximum, rounded
/// half-to-even.
#[inline]
pub fn bin_intensity(count: f64, max: f64) -> u8 {
    let scaled = (count * 255.0 / max).round_ties_even();
    scaled.clamp(0.0, 255.0) as u8
}

/// Renders the table as a false-color image: hue runs along x, saturation
/// along y, one grey block per bin. An all-zero table renders all black.
pub fn render_histogram(histogram: &HsHistogram) -> RgbImage {
    let mut canvas = RgbImage::new(RENDER_WIDTH, RENDER_HEIGHT);

    let max = histogram.max();
    if !(max.is_finite() && max > 0.0) {
        tracing::warn!(max, "histogram has no positive maximum, rendering black");
        return canvas;
    }

    for (h, s, count) in histogram.iter_bins() {
        let intensity = bin_intensity(count, max);
        if intensity == 0 {
            continue;
        }
        let block = Rect::at((h as u32 * BLOCK_SIZE) as i32, (s as u32 * BLOCK_SIZE) as i32)
            .of_size(BLOCK_SIZE, BLOCK_SIZE);
        draw_filled_rect_mut(&mut canvas, block, Rgb([intensity; 3]));
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_rounds_half_to_even() {
        assert_eq!(bin_intensity(1.0, 2.0), 128); // 127.5
        assert_eq!(bin_intensity(1.0, 10.0), 26); // 25.5
        assert_eq!(bin_intensity(3.0, 3.0), 255);
        assert_eq!(bin_intensity(0.0, 3.0), 0);
    }

    #[test]
    fn block_covers_exactly_its_cell() {
        let mut histogram = HsHistogram::new();
        histogram.set(2, 5, 9.0);
        let raster = render_histogram(&histogram);

        assert_eq!(raster.get_pixel(20, 50), &Rgb([255; 3]));
        assert_eq!(raster.get_pixel(29, 59), &Rgb([255; 3]));
        assert_eq!(raster.get_pixel(30, 50), &Rgb([0; 3]));
        assert_eq!(raster.get_pixel(20, 60), &Rgb([0; 3]));
        assert_eq!(raster.get_pixel(19, 49), &Rgb([0; 3]));
    }

    #[test]
    fn non_finite_maximum_renders_black() {
        let mut histogram = HsHistogram::new();
        histogram.set(0, 0, f64::INFINITY);
        let raster = render_histogram(&histogram);
        assert!(raster.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
