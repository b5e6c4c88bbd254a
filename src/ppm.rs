// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The plain-text (P3) writer, and the dispatch to the `image` crate's
//! encoders for every other format.
//!
//! The P3 output keeps a quirk of the files this renderer has always
//! produced: the header declares a maximum channel value of 256, one
//! more than an 8-bit sample can hold.  Readers accept it, and keeping
//! it means old and new renders compare byte for byte.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use log::info;

use crate::error::FlameError;

/// The maximum channel value written into the P3 header.
pub const HEADER_MAX_VALUE: u32 = 256;

/// Write `image` as P3.  Every sample triple is followed by a space,
/// every row by a newline, and the whole image by one more newline.
pub fn write_ppm<W: Write>(image: &RgbImage, mut out: W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    write!(out, "P3\n{} {}\n{}\n", width, height, HEADER_MAX_VALUE)?;
    for y in 0..height {
        for x in 0..width {
            let pixel = image.get_pixel(x, y);
            write!(out, "{} {} {} ", pixel[0], pixel[1], pixel[2])?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("ppm"))
        .unwrap_or(false)
}

/// Save the image to `path`.  A `.ppm` path (or one without an
/// extension) gets the P3 writer; anything else is handed to the
/// `image` crate, which picks an encoder from the extension.
pub fn save(image: &RgbImage, path: &Path) -> Result<(), FlameError> {
    if is_ppm(path) || path.extension().is_none() {
        let file = File::create(path).map_err(|e| FlameError::output(path, e))?;
        write_ppm(image, BufWriter::new(file)).map_err(|e| FlameError::output(path, e))?;
    } else {
        image.save(path).map_err(|e| FlameError::output(path, e))?;
    }
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn render(image: &RgbImage) -> String {
        let mut out = Vec::new();
        write_ppm(image, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn two_by_one_layout() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(1, 0, Rgb([255, 255, 255]));
        let text = render(&image);
        assert!(text.starts_with("P3\n2 1\n256\n"));
        assert_eq!(text, "P3\n2 1\n256\n0 0 0 255 255 255 \n\n");
    }

    #[test]
    fn rows_are_written_top_down() {
        let mut image = RgbImage::new(1, 2);
        image.put_pixel(0, 0, Rgb([1, 2, 3]));
        image.put_pixel(0, 1, Rgb([4, 5, 6]));
        assert_eq!(render(&image), "P3\n1 2\n256\n1 2 3 \n4 5 6 \n\n");
    }

    #[test]
    fn save_writes_p3_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        save(&RgbImage::new(2, 2), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n2 2\n256\n0 0 0 0 0 0 \n0 0 0 0 0 0 \n\n");
    }

    #[test]
    fn unwritable_destination_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");
        match save(&RgbImage::new(1, 1), &path) {
            Err(FlameError::Output { .. }) => {}
            other => panic!("expected an output error, got {:?}", other),
        }
    }
}
