use std::io::Cursor;

use ndarray::Array4;
use tract_onnx::prelude::*;

use crate::error::ClassifierError;

/// A loaded model that maps an `[1, R, R, 3]` input to one or more flat
/// score vectors.
///
/// [`OnnxClassifier`] is the production runtime; tests plug in stubs.
pub trait Classifier: Send + Sync {
    fn run(&self, input: &Array4<f32>) -> Result<Vec<Vec<f32>>, ClassifierError>;

    /// Short description used in logs.
    fn backend(&self) -> &'static str;
}

pub struct OnnxClassifier {
    model: TypedRunnableModel<TypedModel>,
}

impl OnnxClassifier {
    /// Parses and optimizes an ONNX graph for a fixed NHWC input.
    pub fn from_bytes(bytes: &[u8], resolution: u32) -> Result<Self, ClassifierError> {
        let side = resolution as usize;
        let model = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(bytes))
            .and_then(|m| m.with_input_fact(0, f32::fact(&[1, side, side, 3]).into()))
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| ClassifierError::ModelLoad(format!("{:#}", e)))?;
        Ok(Self { model })
    }
}

impl Classifier for OnnxClassifier {
    fn run(&self, input: &Array4<f32>) -> Result<Vec<Vec<f32>>, ClassifierError> {
        let contiguous = input.as_standard_layout();
        let data = contiguous
            .as_slice()
            .ok_or_else(|| ClassifierError::Inference("input is not contiguous".to_string()))?;
        let tensor = Tensor::from_shape(input.shape(), data)
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        let outputs = self
            .model
            .run(tvec!(tensor.into()))
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        outputs
            .iter()
            .map(|output| {
                output
                    .to_array_view::<f32>()
                    .map(|view| view.iter().copied().collect::<Vec<f32>>())
                    .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))
            })
            .collect()
    }

    fn backend(&self) -> &'static str {
        "tract-onnx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bytes_that_are_not_onnx() {
        let err = OnnxClassifier::from_bytes(b"{\"format\":\"layers-model\"}", 224)
            .err()
            .expect("garbage model must not load");
        assert!(matches!(err, ClassifierError::ModelLoad(_)));
    }
}
