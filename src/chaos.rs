// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The chaos game.
//!
//! Start from a random point in the square (-1,-1)..(1,1).  Over and
//! over, pick one of the transforms of the table at random and move
//! the point with it.  After a short burn-in the point is on (or
//! vanishingly close to) the attractor of the function system, and
//! every place it lands from then on is a sample of the fractal.
//! Counting those samples per pixel produces the histogram that the
//! tone mapper turns into an image.
//!
//! There is no convergence test.  The game always plays its full
//! number of rounds; more rounds means more samples and finer detail.

use log::{debug, info};
use num::Complex;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::FlameError;
use crate::histogram::Histogram;
use crate::planes::PlaneMapper;
use crate::xforms::{Point, Transform};

/// Iterations `0..=BURN_IN` are never recorded.
pub const BURN_IN: usize = 20;

/// What happened to the samples of one run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stats {
    /// Rounds played, burn-in included.
    pub iterations: usize,
    /// Samples that landed on the plane and were counted.
    pub recorded: usize,
    /// Samples past burn-in that fell outside the plane.
    pub discarded: usize,
    /// Times the point went non-finite and had to be restarted.
    pub reseeds: usize,
}

/// The parameters of a game: the transform table, how many rounds to
/// play, and how many of the first rounds to throw away.  Once set,
/// this object is not mutated; the random generator is supplied per
/// run so that the same game can be replayed from any seed.
#[derive(Debug)]
pub struct ChaosGame<'a, T> {
    table: &'a [T],
    iterations: usize,
    burn_in: usize,
}

impl<'a, T: Transform> ChaosGame<'a, T> {
    /// Requires a non-empty table of transforms and the total number
    /// of iterations to play.
    pub fn new(table: &'a [T], iterations: usize) -> Result<Self, FlameError> {
        if table.is_empty() {
            return Err(FlameError::NoTransforms);
        }
        Ok(ChaosGame {
            table,
            iterations,
            burn_in: BURN_IN,
        })
    }

    /// Replace the default burn-in.  Iterations `0..=burn_in` are
    /// skipped.
    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    /// Start a fresh walk.  The generator first seeds the point, x
    /// then y, and is then drawn from once per round to pick a
    /// transform.
    pub fn orbit<R: Rng>(&self, mut rng: R) -> Orbit<'a, T, R> {
        let seeder = Uniform::new_inclusive(-1.0_f64, 1.0_f64);
        let point = Complex::new(seeder.sample(&mut rng), seeder.sample(&mut rng));
        Orbit {
            table: self.table,
            chooser: Uniform::new(0, self.table.len()),
            seeder,
            rng,
            point,
            iteration: 0,
            iterations: self.iterations,
            burn_in: self.burn_in,
            warm_until: self.burn_in,
            reseeds: 0,
        }
    }

    /// Play the whole game into an existing histogram.
    pub fn render_into<R: Rng>(
        &self,
        plane: &PlaneMapper,
        histogram: &mut Histogram,
        rng: R,
    ) -> Stats {
        info!(
            "Playing {} rounds over {} transforms into a {}x{} histogram",
            self.iterations,
            self.table.len(),
            plane.width(),
            plane.height()
        );
        let mut stats = Stats {
            iterations: self.iterations,
            ..Stats::default()
        };
        let mut orbit = self.orbit(rng);
        for (_, point) in orbit.by_ref() {
            if histogram.plot(plane, &point) {
                stats.recorded += 1;
            } else {
                stats.discarded += 1;
            }
        }
        stats.reseeds = orbit.reseeds();
        info!(
            "Recorded {} samples, discarded {}, reseeded {} times",
            stats.recorded, stats.discarded, stats.reseeds
        );
        stats
    }

    /// Play the whole game into a new, zeroed histogram the size of
    /// `plane`.
    pub fn render<R: Rng>(&self, plane: &PlaneMapper, rng: R) -> (Histogram, Stats) {
        let mut histogram = Histogram::for_plane(plane);
        let stats = self.render_into(plane, &mut histogram, rng);
        (histogram, stats)
    }
}

/// The walk of a single point, as an iterator over the samples that
/// survive burn-in.  Each item is the iteration index and the point
/// produced by that iteration.
pub struct Orbit<'a, T, R> {
    table: &'a [T],
    chooser: Uniform<usize>,
    seeder: Uniform<f64>,
    rng: R,
    point: Point,
    iteration: usize,
    iterations: usize,
    burn_in: usize,
    // The last iteration that is still warming up.
    warm_until: usize,
    reseeds: usize,
}

impl<'a, T: Transform, R: Rng> Orbit<'a, T, R> {
    /// The point as of the last iteration played.
    pub fn point(&self) -> Point {
        self.point
    }

    /// How many times the point has been restarted so far.
    pub fn reseeds(&self) -> usize {
        self.reseeds
    }

    // A point that has gone to infinity or NaN never comes back, so
    // start over somewhere in the square and warm up again.
    fn reseed(&mut self, iteration: usize) {
        debug!(
            "Point became {:?} at iteration {}, reseeding",
            self.point, iteration
        );
        self.point = Complex::new(
            self.seeder.sample(&mut self.rng),
            self.seeder.sample(&mut self.rng),
        );
        self.warm_until = iteration + self.burn_in;
        self.reseeds += 1;
    }
}

impl<'a, T: Transform, R: Rng> Iterator for Orbit<'a, T, R> {
    type Item = (usize, Point);

    fn next(&mut self) -> Option<Self::Item> {
        while self.iteration < self.iterations {
            let iteration = self.iteration;
            self.iteration += 1;

            let xform = &self.table[self.chooser.sample(&mut self.rng)];
            self.point = xform.apply(self.point);

            if !(self.point.re.is_finite() && self.point.im.is_finite()) {
                self.reseed(iteration);
                continue;
            }
            if iteration > self.warm_until {
                return Some((iteration, self.point));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xforms::{FLAME, SIERPINSKI};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Blowup;

    impl Transform for Blowup {
        fn apply(&self, _: Point) -> Point {
            Complex::new(std::f64::NAN, 0.0)
        }
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn empty_table_is_refused() {
        let table: [crate::xforms::Xform; 0] = [];
        assert!(ChaosGame::new(&table, 100).is_err());
    }

    #[test]
    fn burn_in_only_game_leaves_histogram_blank() {
        let plane = PlaneMapper::unit_square(16, 16).unwrap();
        for &iterations in &[0, 1, 20, 21] {
            let game = ChaosGame::new(&FLAME, iterations).unwrap();
            let (histogram, stats) = game.render(&plane, rng(1));
            assert!(histogram.is_blank(), "{} iterations wrote samples", iterations);
            assert_eq!(stats.recorded + stats.discarded, 0);
        }
    }

    #[test]
    fn first_sample_comes_from_iteration_twenty_one() {
        let game = ChaosGame::new(&SIERPINSKI, 22).unwrap();
        let samples: Vec<_> = game.orbit(rng(3)).collect();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].0, 21);
    }

    #[test]
    fn orbit_never_yields_burn_in_iterations() {
        let game = ChaosGame::new(&FLAME, 5_000).unwrap();
        let samples: Vec<_> = game.orbit(rng(9)).collect();
        assert!(samples.iter().all(|&(i, _)| i > BURN_IN));
        assert_eq!(samples.len(), 5_000 - BURN_IN - 1);
    }

    #[test]
    fn recorded_samples_lie_inside_the_open_square() {
        let plane = PlaneMapper::unit_square(64, 64).unwrap();
        let game = ChaosGame::new(&FLAME, 20_000).unwrap();
        let inside = game
            .orbit(rng(5))
            .filter(|(_, p)| p.re > -1.0 && p.re < 1.0 && p.im > -1.0 && p.im < 1.0)
            .count();
        let (histogram, stats) = game.render(&plane, rng(5));
        assert_eq!(histogram.total() as usize, stats.recorded);
        assert!(stats.recorded <= inside);

        let mut replay = Histogram::for_plane(&plane);
        for (i, p) in game.orbit(rng(5)) {
            if replay.plot(&plane, &p) {
                assert!(
                    p.re > -1.0 && p.re < 1.0 && p.im > -1.0 && p.im < 1.0,
                    "iteration {} recorded {:?} outside the open square",
                    i,
                    p
                );
            }
        }
        assert_eq!(replay, histogram);
        assert_eq!(stats.recorded + stats.discarded, 20_000 - BURN_IN - 1);
    }

    #[test]
    fn histogram_never_decreases_while_playing() {
        let plane = PlaneMapper::unit_square(32, 32).unwrap();
        let game = ChaosGame::new(&FLAME, 10_000).unwrap();
        let mut histogram = Histogram::for_plane(&plane);
        let mut previous = histogram.clone();
        for (n, (_, point)) in game.orbit(rng(11)).enumerate() {
            histogram.plot(&plane, &point);
            if n % 500 == 0 {
                assert!(histogram
                    .cells()
                    .iter()
                    .zip(previous.cells())
                    .all(|(now, before)| now >= before));
                previous = histogram.clone();
            }
        }
    }

    #[test]
    fn same_seed_same_histogram() {
        let plane = PlaneMapper::unit_square(32, 32).unwrap();
        let game = ChaosGame::new(&FLAME, 10_000).unwrap();
        let (a, _) = game.render(&plane, rng(42));
        let (b, _) = game.render(&plane, rng(42));
        let (c, _) = game.render(&plane, rng(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sierpinski_samples_stay_on_the_triangle() {
        let game = ChaosGame::new(&SIERPINSKI, 10_000).unwrap();
        for (_, p) in game.orbit(rng(7)) {
            assert!(p.re > -1e-5 && p.im > -1e-5 && p.re + p.im < 1.0 + 1e-5);
        }
    }

    #[test]
    fn non_finite_points_are_reseeded_not_recorded() {
        let table = [Blowup];
        let game = ChaosGame::new(&table, 100).unwrap();
        let mut orbit = game.orbit(rng(1));
        assert_eq!(orbit.by_ref().count(), 0);
        assert_eq!(orbit.reseeds(), 100);
        assert!(orbit.point().re.is_finite());
    }

    #[test]
    fn custom_burn_in_is_honoured() {
        let game = ChaosGame::new(&SIERPINSKI, 10).unwrap().with_burn_in(4);
        let first = game.orbit(rng(2)).next().map(|(i, _)| i);
        assert_eq!(first, Some(5));
    }
}
