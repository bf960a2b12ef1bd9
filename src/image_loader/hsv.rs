//! 8-bit BGR to HSV conversion.
//!
//! Hue is stored halved (0-179) so it fits a byte; saturation and value use
//! the full 0-255 range. The arithmetic is 12-bit fixed point with
//! reciprocal tables, which reproduces the values produced by the usual
//! vision-library conversion bit for bit.

const HSV_SHIFT: i32 = 12;
const HUE_RANGE: i32 = 180;

lazy_static::lazy_static! {
    /// round((255 << 12) / v)
    static ref SDIV_TABLE: [i32; 256] = {
        let mut table = [0i32; 256];
        for (i, entry) in table.iter_mut().enumerate().skip(1) {
            *entry = ((255i32 << HSV_SHIFT) as f64 / i as f64).round() as i32;
        }
        table
    };

    /// round((180 << 12) / (6 * diff))
    static ref HDIV_TABLE: [i32; 256] = {
        let mut table = [0i32; 256];
        for (i, entry) in table.iter_mut().enumerate().skip(1) {
            *entry = ((HUE_RANGE << HSV_SHIFT) as f64 / (6.0 * i as f64)).round() as i32;
        }
        table
    };
}

/// Converts one `[b, g, r]` pixel to `[h, s, v]`, with `h` in 0..180.
#[inline]
pub fn bgr_to_hsv(bgr: [u8; 3]) -> [u8; 3] {
    let b = bgr[0] as i32;
    let g = bgr[1] as i32;
    let r = bgr[2] as i32;

    let v = b.max(g).max(r);
    let vmin = b.min(g).min(r);
    let diff = v - vmin;

    let round = 1 << (HSV_SHIFT - 1);
    let s = (diff * SDIV_TABLE[v as usize] + round) >> HSV_SHIFT;

    // Red maximum wins ties, then green.
    let h = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = (h * HDIV_TABLE[diff as usize] + round) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_RANGE;
    }

    [h as u8, s as u8, v as u8]
}
