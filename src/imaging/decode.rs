//! Image file decoding into RGB pixel buffers.

use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use image::RgbImage;
use std::path::Path;

/// Decode an image file into an 8-bit RGB pixel buffer.
///
/// Any input color mode (alpha, grayscale, palette) is converted to
/// 3-channel RGB. Unreadable paths and non-image content both fail with
/// [`Error::ImageDecode`].
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| Error::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Whether a path carries one of the commonly supported image extensions.
///
/// Advisory only; decoding is attempted regardless of extension.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
