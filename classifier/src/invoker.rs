use shared::PredictionResult;

use crate::bundle::ModelBundle;
use crate::error::{ClassifierError, Stage};
use crate::preprocess::{decode_image, preprocess_image};

/// Readiness of the single model a session uses.
#[derive(Debug, Default)]
pub enum ModelSlot {
    #[default]
    Pending,
    Ready(ModelBundle),
    /// Load failed; holds the reason for the rest of the session.
    Failed(String),
}

/// Owns the session's model and runs analysis requests against it.
#[derive(Debug, Default)]
pub struct InferenceInvoker {
    slot: ModelSlot,
}

impl InferenceInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(bundle: ModelBundle) -> Self {
        Self {
            slot: ModelSlot::Ready(bundle),
        }
    }

    /// Stores the outcome of the one-time model load.
    pub fn install(&mut self, loaded: Result<ModelBundle, ClassifierError>) {
        self.slot = match loaded {
            Ok(bundle) => ModelSlot::Ready(bundle),
            Err(ClassifierError::ModelLoad(reason)) => {
                log::error!("Failed to load model: {}", reason);
                ModelSlot::Failed(reason)
            }
            Err(e) => {
                log::error!("Failed to load model: {}", e);
                ModelSlot::Failed(e.to_string())
            }
        };
    }

    pub fn slot(&self) -> &ModelSlot {
        &self.slot
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.slot, ModelSlot::Ready(_))
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.slot, ModelSlot::Failed(_))
    }

    pub fn bundle(&self) -> Result<&ModelBundle, ClassifierError> {
        match &self.slot {
            ModelSlot::Ready(bundle) => Ok(bundle),
            ModelSlot::Pending => Err(ClassifierError::ModelNotReady),
            ModelSlot::Failed(reason) => Err(ClassifierError::ModelLoad(reason.clone())),
        }
    }

    /// Classifies one image. Fails before touching the bytes unless the model
    /// is ready.
    pub fn predict(&self, image: &[u8]) -> Result<PredictionResult, ClassifierError> {
        predict(self.bundle()?, image)
    }
}

/// Decode, squash-resize, normalize, invoke, and pick the best label.
pub fn predict(bundle: &ModelBundle, image: &[u8]) -> Result<PredictionResult, ClassifierError> {
    log::debug!("analysis stage: {:?}", Stage::Decoding);
    let decoded = decode_image(image)?;

    log::debug!("analysis stage: {:?}", Stage::Preprocessing);
    let input = preprocess_image(&decoded, bundle.resolution())?;
    drop(decoded);

    log::debug!("analysis stage: {:?}", Stage::Invoking);
    let scores = bundle
        .classifier()
        .run(&input)?
        .into_iter()
        .next()
        .ok_or_else(|| ClassifierError::Inference("model returned no outputs".to_string()))?;

    let result = PredictionResult::from_scores(scores, bundle.labels())
        .ok_or_else(|| ClassifierError::Inference("model produced no scores".to_string()))?;

    log::debug!("analysis stage: {:?}", Stage::Done);
    log::info!(
        "Predicted {} ({:.3})",
        result.label,
        result.confidence
    );
    Ok(result)
}
