// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense grid of visit counts, one cell per output pixel.

use crate::planes::{Pixel, PlaneMapper};
use crate::xforms::Point;

/// Visit counts laid out row-major, y then x.  Every cell starts at
/// zero and only ever grows while the chaos game runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl Histogram {
    /// A zeroed histogram of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Histogram {
            width,
            height,
            cells: vec![0.0_f64; width * height],
        }
    }

    /// A zeroed histogram covering the integral plane of `plane`.
    pub fn for_plane(plane: &PlaneMapper) -> Self {
        Histogram::new(plane.width(), plane.height())
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All of the cells, row-major.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// The count at a pixel.  Panics outside the grid, like slice indexing.
    pub fn get(&self, pixel: Pixel) -> f64 {
        assert!(pixel.0 < self.width && pixel.1 < self.height);
        self.cells[pixel.1 * self.width + pixel.0]
    }

    /// Record one more visit at `offset`.
    #[inline]
    pub fn increment(&mut self, offset: usize) {
        self.cells[offset] += 1.0;
    }

    /// Record a visit to `point` if it lands on the plane.  Returns
    /// whether the point was kept.
    pub fn plot(&mut self, plane: &PlaneMapper, point: &Point) -> bool {
        debug_assert_eq!(plane.len(), self.cells.len());
        match plane.point_to_offset(point) {
            Some(offset) => {
                self.increment(offset);
                true
            }
            None => false,
        }
    }

    /// The largest count in the grid, zero for an untouched histogram.
    pub fn max(&self) -> f64 {
        self.cells.iter().cloned().fold(0.0, f64::max)
    }

    /// The sum of all counts, which is the number of samples recorded.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// True when no cell has been visited.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&v| v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    #[test]
    fn new_histogram_is_zeroed() {
        let h = Histogram::new(7, 3);
        assert_eq!(h.cells().len(), 21);
        assert!(h.is_blank());
        assert_eq!(h.max(), 0.0);
    }

    #[test]
    fn plot_counts_inside_and_drops_outside() {
        let plane = PlaneMapper::unit_square(4, 4).unwrap();
        let mut h = Histogram::for_plane(&plane);
        assert!(h.plot(&plane, &Complex::new(0.1, 0.1)));
        assert!(h.plot(&plane, &Complex::new(0.2, 0.2)));
        assert!(!h.plot(&plane, &Complex::new(1.0, 0.2)));
        assert!(!h.plot(&plane, &Complex::new(0.2, -7.0)));
        assert_eq!(h.get(Pixel(2, 2)), 2.0);
        assert_eq!(h.total(), 2.0);
        assert_eq!(h.max(), 2.0);
    }

    #[test]
    fn get_reads_row_major() {
        let mut h = Histogram::new(3, 2);
        h.increment(4);
        assert_eq!(h.get(Pixel(1, 1)), 1.0);
        assert_eq!(h.get(Pixel(1, 0)), 0.0);
    }
}
