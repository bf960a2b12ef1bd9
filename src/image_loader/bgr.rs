use crate::errors::{HistogramError, Result};
use image::{DynamicImage, RgbImage};

/// An 8-bit, three channel image with blue-green-red byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Bytes needed for `width x height` BGR pixels, if that fits in memory.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| HistogramError::InvalidLayout {
            width,
            height,
            reason: "byte length overflows the address space".to_string(),
        })
}

impl BgrImage {
    /// Wraps a row-major BGR buffer. The buffer must hold exactly
    /// `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(HistogramError::InvalidLayout {
                width,
                height,
                reason: format!("expected {} bytes, got {}", expected, data.len()),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Every pixel set to the same `[b, g, r]` triple.
    pub fn from_pixel(width: u32, height: u32, bgr: [u8; 3]) -> Result<Self> {
        let data = bgr.repeat(byte_len(width, height)? / 3);
        Ok(Self { width, height, data })
    }

    pub fn from_rgb(rgb: &RgbImage) -> Self {
        let (width, height) = rgb.dimensions();
        let mut data = Vec::with_capacity(rgb.as_raw().len());
        for pixel in rgb.pixels() {
            data.extend_from_slice(&[pixel[2], pixel[1], pixel[0]]);
        }
        Self { width, height, data }
    }

    /// Converts any decoded image; alpha is dropped, wider samples are
    /// reduced to 8 bits by the `image` crate.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from_rgb(&image.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Iterates `[b, g, r]` triples in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }
}
