//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "naturid";

/// Sentinel returned for class indices absent from a label table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Leading batch dimension of every prepared input tensor.
pub const BATCH_SIZE: usize = 1;

/// Number of color channels every model input expects.
pub const INPUT_CHANNELS: usize = 3;

/// Divisor mapping 8-bit pixel intensities into [0, 1].
pub const PIXEL_SCALE: f32 = 255.0;

/// Quantized pixel value bounds for 8-bit unsigned model inputs.
pub mod quant {
    /// Minimum representable quantized value.
    pub const MIN: f32 = 0.0;
    /// Maximum representable quantized value.
    pub const MAX: f32 = 255.0;
}

/// Image file extensions accepted without a warning (case-insensitive).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];
