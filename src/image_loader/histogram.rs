use super::bgr::BgrImage;
use super::hsv::bgr_to_hsv;
use crate::errors::{HistogramError, Result};
use image::DynamicImage;
use std::ops::Range;
use std::time::Instant;

/// Hue is quantized to 30 levels
pub const HUE_BINS: usize = 30;
/// Saturation is quantized to 32 levels
pub const SATURATION_BINS: usize = 32;
/// Upper (exclusive) bound of the 8-bit hue channel
pub const HUE_RANGE: u32 = 180;
/// Upper (exclusive) bound of the saturation channel
pub const SATURATION_RANGE: u32 = 256;

/// 2-D frequency table over quantized (hue, saturation) pairs.
///
/// Cells are `f64` so that normalized tables share the type and counts
/// stay exact well past the 2^24 limit of `f32`.
#[derive(Debug, Clone, PartialEq)]
pub struct HsHistogram {
    bins: [[f64; SATURATION_BINS]; HUE_BINS],
}

impl Default for HsHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl HsHistogram {
    /// All-zero table.
    pub fn new() -> Self {
        Self {
            bins: [[0.0; SATURATION_BINS]; HUE_BINS],
        }
    }

    /// Builds a table from explicit cell values, `bins[hue][saturation]`.
    pub fn from_bins(bins: [[f64; SATURATION_BINS]; HUE_BINS]) -> Self {
        Self { bins }
    }

    /// # Panics
    /// If either index is out of range.
    pub fn get(&self, hue_bin: usize, saturation_bin: usize) -> f64 {
        self.bins[hue_bin][saturation_bin]
    }

    pub fn set(&mut self, hue_bin: usize, saturation_bin: usize, value: f64) {
        self.bins[hue_bin][saturation_bin] = value;
    }

    /// Hue bin for an 8-bit hue value (0-179).
    #[inline]
    pub fn hue_bin(hue: u8) -> usize {
        hue as usize * HUE_BINS / HUE_RANGE as usize
    }

    /// Saturation bin for an 8-bit saturation value.
    #[inline]
    pub fn saturation_bin(saturation: u8) -> usize {
        saturation as usize * SATURATION_BINS / SATURATION_RANGE as usize
    }

    /// Half-open range of hue values that fall in `bin`.
    pub fn hue_range(bin: usize) -> Range<u32> {
        let width = HUE_RANGE / HUE_BINS as u32;
        bin as u32 * width..(bin as u32 + 1) * width
    }

    /// Half-open range of saturation values that fall in `bin`.
    pub fn saturation_range(bin: usize) -> Range<u32> {
        let width = SATURATION_RANGE / SATURATION_BINS as u32;
        bin as u32 * width..(bin as u32 + 1) * width
    }

    /// Table from integer pixel counts.
    pub fn from_counts(counts: &[[u64; SATURATION_BINS]; HUE_BINS]) -> Self {
        let mut bins = [[0.0; SATURATION_BINS]; HUE_BINS];
        for (row, counts) in bins.iter_mut().zip(counts) {
            for (cell, &count) in row.iter_mut().zip(counts) {
                *cell = count as f64;
            }
        }
        Self { bins }
    }

    /// Largest cell value; 0.0 for an empty table.
    pub fn max(&self) -> f64 {
        self.iter_bins().map(|(_, _, v)| v).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.iter_bins().map(|(_, _, v)| v).sum()
    }

    /// Bin with the largest count (first one on ties), or `None` when
    /// every cell is zero.
    pub fn peak_bin(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (h, s, v) in self.iter_bins() {
            if v > 0.0 && best.map_or(true, |(_, _, b)| v > b) {
                best = Some((h, s, v));
            }
        }
        best.map(|(h, s, _)| (h, s))
    }

    /// Scales every cell so the maximum becomes `target`. An all-zero
    /// table is returned unchanged.
    pub fn normalized(&self, target: f64) -> Self {
        let max = self.max();
        if max <= 0.0 {
            return self.clone();
        }
        let scale = target / max;
        let mut out = self.clone();
        for row in out.bins.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= scale;
            }
        }
        out
    }

    /// `(hue_bin, saturation_bin, value)` in hue-major order.
    pub fn iter_bins(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.bins.iter().enumerate().flat_map(|(h, row)| {
            row.iter().enumerate().map(move |(s, &v)| (h, s, v))
        })
    }
}

/// Hue/saturation histogram of a BGR image. Every pixel contributes
/// exactly once; the value channel is ignored.
pub fn compute_hs_histogram(image: &BgrImage) -> Result<HsHistogram> {
    if image.is_empty() {
        return Err(HistogramError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let start = Instant::now();
    // Integer counts, converted once at the end
    let mut counts = [[0u64; SATURATION_BINS]; HUE_BINS];
    for pixel in image.pixels() {
        let [hue, saturation, _] = bgr_to_hsv(pixel);
        counts[HsHistogram::hue_bin(hue)][HsHistogram::saturation_bin(saturation)] += 1;
    }
    let histogram = HsHistogram::from_counts(&counts);

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "computed hue/saturation histogram"
    );
    Ok(histogram)
}

/// Convenience for decoded images of any pixel format.
pub fn compute_hs_histogram_from_dynamic(image: &DynamicImage) -> Result<HsHistogram> {
    compute_hs_histogram(&BgrImage::from_dynamic(image))
}
