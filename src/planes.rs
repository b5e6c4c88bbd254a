// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and an open window on the real plane bounded by a leftlower and a
//! rightupper corner.  The chaos game uses it to decide which of its
//! points are worth keeping and where they land.
use crate::error::FlameError;
use crate::xforms::Point;
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// The lower-left corner and upper-right corner of the real window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RealPlane(pub Point, pub Point);

/// Describes the x, y of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps points of the real window onto pixels.  The window is open:
/// a point sitting exactly on an edge is outside it.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two corners of the real window, left-lower and right-upper
    pub real_plane: RealPlane,
    // Pixels per unit of the real plane, horizontally and vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the real window.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Point,
        rightupper: Point,
    ) -> Result<PlaneMapper, FlameError> {
        if width == 0 || height == 0 {
            return Err(FlameError::EmptyPlane { width, height });
        }

        if width > u32::max_value() as usize || height > u32::max_value() as usize {
            return Err(FlameError::OversizedPlane { width, height });
        }

        if rightupper.re <= leftlower.re || rightupper.im <= leftlower.im {
            return Err(FlameError::BadCorners);
        }

        let grid_factors = (
            (width as f64) / (rightupper.re - leftlower.re),
            (height as f64) / (rightupper.im - leftlower.im),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            real_plane: RealPlane(leftlower, rightupper),
            grid_factors,
        })
    }

    /// The square from (-1,-1) to (1,1), which is where the flame
    /// is rendered.  A point at `x` lands on column
    /// `((x + 1) / 2) * width`.
    pub fn unit_square(width: usize, height: usize) -> Result<PlaneMapper, FlameError> {
        PlaneMapper::new(
            width,
            height,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
        )
    }

    /// The width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// The height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Construction refuses empty planes, so this is always false; it
    /// exists because `len` does.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True only for points strictly inside the window.  NaNs fail
    /// every comparison and so are never inside.
    pub fn contains(&self, point: &Point) -> bool {
        let RealPlane(ll, ur) = self.real_plane;
        point.re > ll.re && point.re < ur.re && point.im > ll.im && point.im < ur.im
    }

    /// Given a point on the real plane, find the pixel it truncates
    /// to.  Points outside the open window map to nothing, and so do
    /// the few points just inside the far edge that round up onto
    /// pixel `width` or `height`.
    pub fn point_to_pixel(&self, point: &Point) -> Option<Pixel> {
        if !self.contains(point) {
            return None;
        }
        let left = (point.re - self.real_plane.0.re) * self.grid_factors.0;
        let top = (point.im - self.real_plane.0.im) * self.grid_factors.1;
        let pixel = Pixel(left as usize, top as usize);
        if pixel.0 >= self.integral_plane.0 || pixel.1 >= self.integral_plane.1 {
            return None;
        }
        Some(pixel)
    }

    /// Map a point to its pixel, then to the linear row-major offset
    /// of that pixel in a buffer the size of the plane.
    pub fn point_to_offset(&self, point: &Point) -> Option<usize> {
        self.point_to_pixel(point)
            .map(|Pixel(left, top)| top * self.integral_plane.0 + left)
    }
}
