// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The transforms of the iterated function system.
//!
//! Each transform is an affine map of the plane, optionally followed
//! by a weighted blend of nonlinear "variations."  Only two variations
//! are supported here, sinusoidal and spherical; between them they are
//! enough to fold the affine attractor into something flame-like.

use num::Complex;

/// A point on the real plane.  As with the buddhabrot's orbits, a
/// complex number already is a point: `re` is x and `im` is y.
pub type Point = Complex<f64>;

/// Anything that can move a point of the plane to another point.  The
/// chaos game only needs this much from its table.
pub trait Transform {
    /// Map `point` to its image under this transform.  Must be a pure
    /// function of its input.
    fn apply(&self, point: Point) -> Point;
}

/// A plain affine map: `(a·x + b·y + c, d·x + e·y + f)`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform for Affine {
    #[inline]
    fn apply(&self, p: Point) -> Point {
        Complex::new(
            self.a * p.re + self.b * p.im + self.c,
            self.d * p.re + self.e * p.im + self.f,
        )
    }
}

/// An affine map followed by a weighted sum of the sinusoidal and
/// spherical variations.  The first three coefficients always drive
/// x and the second three always drive y; swapping them produces a
/// different fractal, not a mirrored one.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    /// Weight of `sinusoidal` in the blend.  Non-negative.
    pub sinusoidal: f64,
    /// Weight of `spherical` in the blend.  Non-negative.
    pub spherical: f64,
}

impl Xform {
    /// The affine half of the transform, before any variation.
    pub fn affine(&self) -> Affine {
        Affine {
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
            e: self.e,
            f: self.f,
        }
    }
}

impl Transform for Xform {
    #[inline]
    fn apply(&self, point: Point) -> Point {
        apply_transform(point, self)
    }
}

/// `(sin x, sin y)`
#[inline]
pub fn sinusoidal(p: Point) -> Point {
    Complex::new(p.re.sin(), p.im.sin())
}

/// `(x/r², y/r²)`.  The origin has no inverse, so it maps to itself
/// rather than to a pair of NaNs.
#[inline]
pub fn spherical(p: Point) -> Point {
    let r2 = p.norm_sqr();
    if r2 == 0.0 {
        return p;
    }
    p / r2
}

/// Run the affine map of `xform`, then blend the two variations of the
/// result by the transform's weights.
pub fn apply_transform(point: Point, xform: &Xform) -> Point {
    let p = xform.affine().apply(point);
    sinusoidal(p) * xform.sinusoidal + spherical(p) * xform.spherical
}

/// The hand-picked five-transform table rendered by default.
pub const FLAME: [Xform; 5] = [
    Xform {
        a: 0.562,
        b: -0.482,
        c: 0.0,
        d: 0.413,
        e: 0.590,
        f: 0.0,
        sinusoidal: 0.7,
        spherical: 0.3,
    },
    Xform {
        a: -0.314,
        b: 0.622,
        c: 0.291,
        d: -0.530,
        e: -0.128,
        f: 0.182,
        sinusoidal: 0.9,
        spherical: 0.0,
    },
    Xform {
        a: 0.402,
        b: 0.119,
        c: -0.457,
        d: 0.085,
        e: 0.473,
        f: -0.334,
        sinusoidal: 0.4,
        spherical: 0.6,
    },
    Xform {
        a: -0.721,
        b: -0.203,
        c: 0.112,
        d: 0.217,
        e: -0.698,
        f: 0.364,
        sinusoidal: 0.5,
        spherical: 0.25,
    },
    Xform {
        a: 0.173,
        b: -0.569,
        c: -0.108,
        d: 0.611,
        e: 0.104,
        f: 0.447,
        sinusoidal: 0.2,
        spherical: 0.8,
    },
];

/// The three halving maps of the Sierpinski triangle, with its corners
/// at (0,0), (1,0) and (0,1).
pub const SIERPINSKI: [Affine; 3] = [
    Affine {
        a: 0.5,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 0.5,
        f: 0.0,
    },
    Affine {
        a: 0.5,
        b: 0.0,
        c: 0.5,
        d: 0.0,
        e: 0.5,
        f: 0.0,
    },
    Affine {
        a: 0.5,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 0.5,
        f: 0.5,
    },
];
