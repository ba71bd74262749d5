//! Inference engine wrapper around tract's TFLite runtime.

use crate::constants::{BATCH_SIZE, INPUT_CHANNELS};
use crate::error::{Error, Result};
use std::path::Path;
use tract_core::prelude::*;
use tract_tflite::Tflite;
use tracing::debug;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// Quantization parameters declared by a model's input tensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantization {
    /// Scale factor mapping `[0, 1]` intensities onto the quantized range.
    pub scale: f32,
    /// Offset added after scaling.
    pub zero_point: i32,
}

/// The input contract a loaded model declares: size, dtype, quantization.
///
/// Read once at load time; immutable for the lifetime of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    /// Expected input width in pixels.
    pub input_width: u32,
    /// Expected input height in pixels.
    pub input_height: u32,
    /// Element dtype of the input tensor.
    pub input_dtype: DatumType,
    /// Present when the input dtype is 8-bit unsigned.
    pub quantization: Option<Quantization>,
}

/// A loaded classification model with its declared input contract.
///
/// Assumes exactly one input and one output tensor. Not reentrant; use one
/// engine per thread or guard `infer` with a lock for concurrent use.
pub struct InferenceEngine {
    plan: RunnableModel,
    descriptor: ModelDescriptor,
}

impl InferenceEngine {
    /// Load a TFLite model artifact and read its input descriptor.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ModelFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let model = Tflite::default()
            .model_for_path(path)
            .map_err(|e| model_load_error(path, &e))?;

        let fact = model
            .input_fact(0)
            .map_err(|e| model_load_error(path, &e))?;
        let descriptor = descriptor_from_fact(fact).map_err(|reason| Error::ModelLoad {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(
            "Model input: {}x{} {:?}",
            descriptor.input_width, descriptor.input_height, descriptor.input_dtype
        );

        let plan = model
            .into_optimized()
            .and_then(TypedModel::into_runnable)
            .map_err(|e| model_load_error(path, &e))?;

        Ok(Self { plan, descriptor })
    }

    /// The input contract this model declares.
    pub fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    /// Run one forward pass and return the top-1 class index.
    ///
    /// The single output tensor is read as a score vector; ties resolve to
    /// the lowest index.
    pub fn infer(&self, input: Tensor) -> Result<usize> {
        self.check_input(&input)?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        // Quantized outputs are dequantized before the argmax.
        let scores = outputs[0].cast_to::<f32>().map_err(|e| Error::Inference {
            reason: format!("failed to read output tensor: {e}"),
        })?;
        let view = scores.to_array_view::<f32>().map_err(|e| Error::Inference {
            reason: format!("failed to read output tensor: {e}"),
        })?;

        argmax(view.iter().copied()).ok_or_else(|| Error::Inference {
            reason: "model produced an empty output tensor".to_string(),
        })
    }

    /// Validate an input tensor against the declared descriptor.
    fn check_input(&self, input: &Tensor) -> Result<()> {
        let expected_shape = [
            BATCH_SIZE,
            self.descriptor.input_height as usize,
            self.descriptor.input_width as usize,
            INPUT_CHANNELS,
        ];
        let shape_ok = input.shape() == expected_shape;
        let dtype_ok =
            input.datum_type().unquantized() == self.descriptor.input_dtype.unquantized();

        if shape_ok && dtype_ok {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                expected: format!("{:?} {:?}", self.descriptor.input_dtype, expected_shape),
                actual: format!("{:?} {:?}", input.datum_type(), input.shape()),
            })
        }
    }
}

/// Build a descriptor from the model's declared input fact.
fn descriptor_from_fact(fact: &TypedFact) -> std::result::Result<ModelDescriptor, String> {
    let Some(shape) = fact.shape.as_concrete() else {
        return Err("model input shape is not fully defined".to_string());
    };
    let &[batch, height, width, channels] = shape else {
        return Err(format!("expected a rank-4 NHWC input, got shape {shape:?}"));
    };
    if batch != BATCH_SIZE || channels != INPUT_CHANNELS {
        return Err(format!(
            "expected a [1, H, W, 3] input, got {shape:?}"
        ));
    }

    let input_dtype = fact.datum_type;
    let quantization = match input_dtype.unquantized() {
        DatumType::U8 => {
            let (zero_point, scale) = input_dtype.zp_scale();
            Some(Quantization { scale, zero_point })
        }
        _ => None,
    };

    Ok(ModelDescriptor {
        input_width: width as u32,
        input_height: height as u32,
        input_dtype,
        quantization,
    })
}

/// Index of the maximum score; ties resolve to the lowest index.
fn argmax(scores: impl Iterator<Item = f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, score) in scores.enumerate() {
        let replace = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if replace {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

fn model_load_error(path: &Path, error: &impl std::fmt::Display) -> Error {
    Error::ModelLoad {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}
