//! Pixel buffer to model input tensor conversion.

use crate::constants::{INPUT_CHANNELS, PIXEL_SCALE, quant};
use crate::error::{Error, Result};
use crate::inference::ModelDescriptor;
use image::RgbImage;
use image::imageops::{self, FilterType};
use tract_core::internal::tract_ndarray::Array4;
use tract_core::prelude::*;

/// Crop an image to its centered square, sized by the shorter dimension.
///
/// Excess is discarded from the longer dimension only; aspect ratio is
/// never distorted.
pub fn center_crop(img: &RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    if width == height {
        return img.clone();
    }
    let side = width.min(height);
    imageops::crop_imm(img, (width - side) / 2, (height - side) / 2, side, side).to_image()
}

/// Convert a decoded RGB image into the input tensor a model expects.
///
/// The image is center-cropped to a square, resized with bilinear
/// interpolation to the descriptor's input size, then scaled into `[0, 1]`
/// floats or quantized to u8 per the descriptor. Output shape is
/// `[1, H, W, 3]`. No mean/std normalization is applied.
pub fn prepare(img: &RgbImage, descriptor: &ModelDescriptor) -> Result<Tensor> {
    let square = center_crop(img);
    let resized = imageops::resize(
        &square,
        descriptor.input_width,
        descriptor.input_height,
        FilterType::Triangle,
    );

    let height = descriptor.input_height as usize;
    let width = descriptor.input_width as usize;

    let Some(quantization) = descriptor.quantization else {
        let arr = Array4::from_shape_fn((1, height, width, INPUT_CHANNELS), |(_, y, x, c)| {
            f32::from(resized[(x as u32, y as u32)][c]) / PIXEL_SCALE
        });
        return Ok(arr.into());
    };

    if quantization.scale == 0.0 {
        return Err(Error::InvalidModelDescriptor {
            reason: format!(
                "quantization scale must be non-zero (zero_point {})",
                quantization.zero_point
            ),
        });
    }

    let scale = quantization.scale;
    let zero_point = quantization.zero_point as f32;
    let arr = Array4::from_shape_fn((1, height, width, INPUT_CHANNELS), |(_, y, x, c)| {
        let pixel = f32::from(resized[(x as u32, y as u32)][c]) / PIXEL_SCALE;
        (pixel / scale + zero_point).clamp(quant::MIN, quant::MAX).round() as u8
    });

    // The runtime checks input facts exactly, so the tensor must carry the
    // model's zero-point and scale on its dtype, not plain u8.
    let tensor: Tensor = arr.into();
    tensor
        .cast_to_dt(DatumType::U8.with_zp_scale(quantization.zero_point, scale))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| Error::Internal {
            message: format!("failed to tag quantized input tensor: {e}"),
        })
}
