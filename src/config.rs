// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render settings, and the parsers the command line uses to fill
//! them in.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::FlameError;
use crate::tonemap::ToneMap;

/// Default output size, in pixels, for both dimensions.
pub const DEFAULT_SIZE: usize = 512;
/// Default seed for the random generator.
pub const DEFAULT_SEED: u64 = 1;
/// Default destination file.
pub const DEFAULT_OUTPUT: &str = "test.ppm";

/// Which fixed transform table to play.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Variant {
    /// The five-transform flame, logarithmically tone mapped.
    Flame,
    /// The three halving maps of the Sierpinski triangle, with no
    /// variations, plotted in black and white.
    Sierpinski,
}

impl Variant {
    /// How many rounds this variant plays unless told otherwise.
    pub fn default_iterations(self) -> usize {
        match self {
            Variant::Flame => 10_000_000,
            Variant::Sierpinski => 100_000,
        }
    }

    /// How this variant's histogram becomes an image.
    pub fn tone_map(self) -> ToneMap {
        match self {
            Variant::Flame => ToneMap::Logarithmic,
            Variant::Sierpinski => ToneMap::Binary,
        }
    }
}

impl FromStr for Variant {
    type Err = FlameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flame" => Ok(Variant::Flame),
            "sierpinski" => Ok(Variant::Sierpinski),
            _ => Err(FlameError::Parse {
                what: "variant",
                value: s.to_string(),
            }),
        }
    }
}

/// Everything needed for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Rounds of the chaos game, burn-in included
    pub iterations: usize,
    /// Iterations `0..=burn_in` are not recorded
    pub burn_in: usize,
    /// Seed for the random generator
    pub seed: u64,
    /// Which transform table to play
    pub variant: Variant,
    /// Where the image goes
    pub output: PathBuf,
}

impl RenderConfig {
    /// The defaults for `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        RenderConfig {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            iterations: variant.default_iterations(),
            burn_in: crate::chaos::BURN_IN,
            seed: DEFAULT_SEED,
            variant,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::for_variant(Variant::Flame)
    }
}

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// Parse an image size written as `WIDTHxHEIGHT`.  Both sides must be
/// positive and fit the `u32` coordinates of an image buffer.
pub fn parse_size(s: &str) -> Result<(usize, usize), FlameError> {
    match parse_pair::<u32>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok((w as usize, h as usize)),
        _ => Err(FlameError::Parse {
            what: "image size",
            value: s.to_string(),
        }),
    }
}
