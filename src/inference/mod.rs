//! TFLite model loading and single-image inference.

mod engine;

pub use engine::{InferenceEngine, ModelDescriptor, Quantization};
