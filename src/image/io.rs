//! Conversions to and from the `image` crate, plus PNG load/save helpers.
//!
//! Available when the `image-io` feature is enabled.

use crate::color::Rgba;
use crate::image::{ImageView, OwnedImage};
use crate::util::{SpriteScanError, SpriteScanResult};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

impl From<image::Rgba<u8>> for Rgba {
    fn from(value: image::Rgba<u8>) -> Self {
        Rgba::from(value.0)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(value: Rgba) -> Self {
        image::Rgba(value.channels())
    }
}

/// Creates an owned RGBA image from an `image` crate buffer.
pub fn owned_from_rgba_image(img: &RgbaImage) -> SpriteScanResult<OwnedImage<Rgba>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|&px| Rgba::from(px)).collect();
    OwnedImage::new(data, width, height)
}

/// Creates an owned RGBA image from any decoded image, converting to 8-bit RGBA.
pub fn owned_from_dynamic_image(img: &DynamicImage) -> SpriteScanResult<OwnedImage<Rgba>> {
    owned_from_rgba_image(&img.to_rgba8())
}

/// Copies a view into an `image` crate RGBA buffer.
pub fn to_rgba_image(view: ImageView<'_, Rgba>) -> SpriteScanResult<RgbaImage> {
    let invalid = || SpriteScanError::InvalidDimensions {
        width: view.width(),
        height: view.height(),
    };
    let width = u32::try_from(view.width()).map_err(|_| invalid())?;
    let height = u32::try_from(view.height()).map_err(|_| invalid())?;

    let mut raw = Vec::with_capacity(view.width() * view.height() * 4);
    for y in 0..view.height() {
        let row = view.row(y).ok_or_else(invalid)?;
        for px in row {
            raw.extend_from_slice(&px.channels());
        }
    }
    RgbaImage::from_raw(width, height, raw).ok_or_else(invalid)
}

/// Reads and decodes an image file into RGBA pixels.
///
/// A file that cannot be read yields `InputUnreadable`; bytes that do not
/// decode yield `DecodeFailure`.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> SpriteScanResult<OwnedImage<Rgba>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| SpriteScanError::InputUnreadable {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    let img = image::load_from_memory(&bytes).map_err(|err| SpriteScanError::DecodeFailure {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Encodes a view as PNG bytes.
pub fn encode_png(view: ImageView<'_, Rgba>) -> SpriteScanResult<Vec<u8>> {
    let img = to_rgba_image(view)?;
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|err| SpriteScanError::EncodeFailure {
            reason: err.to_string(),
        })?;
    Ok(buf.into_inner())
}

/// Encodes a view as PNG and writes it to `path`.
///
/// The output file is only created once encoding has succeeded.
pub fn save_png<P: AsRef<Path>>(path: P, view: ImageView<'_, Rgba>) -> SpriteScanResult<()> {
    let bytes = encode_png(view)?;
    fs::write(path.as_ref(), bytes).map_err(|err| SpriteScanError::EncodeFailure {
        reason: format!("{}: {err}", path.as_ref().display()),
    })
}
