#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fractal flame renderer
//!
//! A fractal flame is the attractor of an iterated function system: a
//! handful of transforms of the plane, each an affine map bent by one
//! or more nonlinear "variations."  Pick a point, apply a randomly
//! chosen transform to it, and repeat; after a few rounds the point
//! never leaves the attractor again, and the places it visits trace
//! the fractal out.  This is the chaos game.
//!
//! Rather than plotting visited points directly, we count visits per
//! pixel into a histogram, exactly as a Buddhabrot counts the orbits
//! passing through each pixel.  Once the game is over, the histogram
//! is tone mapped on a logarithmic scale into a grayscale image and
//! written out as a plain-text PPM.

#[macro_use]
extern crate failure;

pub mod chaos;
pub mod config;
pub mod error;
pub mod histogram;
pub mod planes;
pub mod ppm;
pub mod tonemap;
pub mod xforms;

pub use crate::chaos::{ChaosGame, Orbit, Stats};
pub use crate::config::{RenderConfig, Variant};
pub use crate::error::FlameError;
pub use crate::histogram::Histogram;
pub use crate::planes::PlaneMapper;
pub use crate::tonemap::{tone_map, ToneMap};
pub use crate::xforms::{apply_transform, Point, Transform, Xform};

use image::RgbImage;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Play the game described by `config` and return the raw histogram.
pub fn accumulate(config: &RenderConfig) -> Result<(Histogram, Stats), FlameError> {
    let plane = PlaneMapper::unit_square(config.width, config.height)?;
    let rng = StdRng::seed_from_u64(config.seed);
    info!("Rendering {:?} with seed {}", config.variant, config.seed);
    let played = match config.variant {
        Variant::Flame => ChaosGame::new(&xforms::FLAME, config.iterations)?
            .with_burn_in(config.burn_in)
            .render(&plane, rng),
        Variant::Sierpinski => ChaosGame::new(&xforms::SIERPINSKI, config.iterations)?
            .with_burn_in(config.burn_in)
            .render(&plane, rng),
    };
    Ok(played)
}

/// Play the game and tone map the result.
pub fn render(config: &RenderConfig) -> Result<RgbImage, FlameError> {
    let (histogram, _) = accumulate(config)?;
    info!("Busiest cell was visited {} times", histogram.max());
    Ok(tone_map(&histogram, config.variant.tone_map()))
}

/// Render and save to `config.output`.  Nothing is written unless the
/// whole game has been played.
pub fn run(config: &RenderConfig) -> Result<(), FlameError> {
    let image = render(config)?;
    ppm::save(&image, &config.output)
}
