// Writes the canvas to disk through the `image` crate.
// The file format comes from the path extension (".png" for the default path).

use crate::error::Error;
use crate::types::{channels, FrameBuffer};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Convert 0x00RRGGBB pixels into an 8-bit RGB image.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        Rgb(channels(fb.pixels[y as usize * fb.width + x as usize]))
    })
}

/// Encode `fb` to `path`, silently replacing any existing file.
pub fn save_image(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb)
        .save(path)
        .map_err(|source| Error::Save { path: path.to_path_buf(), source })
}
