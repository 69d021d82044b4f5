// SPDX-License-Identifier: MPL-2.0
//! Image loading for the display surface.
//!
//! Decodes an image file with the `image` crate and hands the pixels to an
//! Iced image handle, keeping the pixel dimensions alongside for layout.

use crate::error::{Error, Result};
use iced::widget::image;
use std::path::Path;

/// A decoded image ready to be displayed by Iced.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Loads an image from disk into an [`ImageData`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let decoded = image_rs::open(path.as_ref()).map_err(|err| Error::Image(err.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData {
        handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_reads_dimensions_from_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("test.png");
        let img = RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255]));
        img.save(&path).expect("write png");

        let data = load(&path).expect("load image");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 4);
    }

    #[test]
    fn load_missing_file_is_an_image_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing.png");

        match load(&path) {
            Err(Error::Image(_)) => {}
            other => panic!("expected Image error, got {:?}", other),
        }
    }
}
