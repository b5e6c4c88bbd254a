// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning visit counts into something a person can look at.
//!
//! Counts in a flame histogram span several orders of magnitude: a few
//! cells near the attractor's fixed points are hit millions of times
//! while its wispy edges are hit once or twice.  A linear ramp would
//! show only the hot spots, so intensities follow the logarithm of the
//! count, scaled so that the busiest cell is full white.

use image::{Rgb, RgbImage};
use itertools::iproduct;
use num::clamp;

use crate::histogram::Histogram;
use crate::planes::Pixel;

/// `log(M)` is stretched over this many levels.
pub const LOG_SCALE: f64 = 256.0;

/// The brightest value a channel can hold.
pub const CEILING: u8 = 255;

/// How counts become gray levels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToneMap {
    /// `log(v) * 256 / log(M)`, truncated and clamped to 0..=255.
    Logarithmic,
    /// Any visited cell is white, everything else black.
    Binary,
}

/// The gray level of a cell holding `count` visits, when the busiest
/// cell has a natural log of `log_max`.  Empty cells are black.  When
/// the busiest cell was hit only once there is no range to scale over,
/// and every visited cell is white.
pub fn log_intensity(count: f64, log_max: f64) -> u8 {
    if !(count > 0.0) {
        return 0;
    }
    if !(log_max > 0.0) {
        return CEILING;
    }
    let level = (count.ln() * (LOG_SCALE / log_max)).trunc();
    clamp(level, 0.0, f64::from(CEILING)) as u8
}

/// Render the histogram as a grayscale image of the same size; cell
/// (x, y) becomes pixel (x, y).
pub fn tone_map(histogram: &Histogram, mode: ToneMap) -> RgbImage {
    let log_max = histogram.max().ln();
    let mut image = RgbImage::new(histogram.width() as u32, histogram.height() as u32);
    for (y, x) in iproduct!(0..histogram.height(), 0..histogram.width()) {
        let count = histogram.get(Pixel(x, y));
        let level = match mode {
            ToneMap::Logarithmic => log_intensity(count, log_max),
            ToneMap::Binary if count > 0.0 => CEILING,
            ToneMap::Binary => 0,
        };
        image.put_pixel(x as u32, y as u32, Rgb([level, level, level]));
    }
    image
}
