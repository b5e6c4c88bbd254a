// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by every stage of the renderer.

use std::io;
use std::path::Path;

/// Everything that can go wrong between parsing a configuration and
/// writing the finished image.  Numeric trouble inside the chaos game
/// is not an error; the iterator deals with it locally.
#[derive(Debug, Fail)]
pub enum FlameError {
    /// The integral plane must have at least one pixel in each direction.
    #[fail(display = "Image dimensions must be non-zero, got {}x{}", width, height)]
    EmptyPlane {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Images are addressed with `u32` coordinates.
    #[fail(display = "Image dimensions {}x{} do not fit in an image buffer", width, height)]
    OversizedPlane {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// The corners of the real plane were given in the wrong order.
    #[fail(display = "The left lower corner must lie below and left of the right upper corner")]
    BadCorners,

    /// The chaos game needs at least one transform to choose from.
    #[fail(display = "The transform table is empty")]
    NoTransforms,

    /// A configuration value could not be understood.
    #[fail(display = "Could not parse {}: {:?}", what, value)]
    Parse {
        /// Which setting failed
        what: &'static str,
        /// The offending text
        value: String,
    },

    /// The destination could not be created or written.
    #[fail(display = "Couldn't write output file {}: {}", path, cause)]
    Output {
        /// Destination path, for the diagnostic
        path: String,
        /// The underlying I/O failure
        #[fail(cause)]
        cause: io::Error,
    },
}

impl FlameError {
    pub(crate) fn output(path: &Path, cause: io::Error) -> Self {
        FlameError::Output {
            path: path.display().to_string(),
            cause,
        }
    }
}
