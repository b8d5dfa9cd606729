/// Steps of a single analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Decoding,
    Preprocessing,
    Invoking,
    Done,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Failed to load model: {0}")]
    ModelLoad(String),
    #[error("Model is not loaded yet")]
    ModelNotReady,
    #[error("Could not read image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Failed to prepare image: {0}")]
    Preprocessing(String),
    #[error("Model inference failed: {0}")]
    Inference(String),
}

impl ClassifierError {
    /// The request stage this failure belongs to. Readiness failures happen
    /// before any work starts and report [`Stage::Idle`].
    pub fn stage(&self) -> Stage {
        match self {
            ClassifierError::ModelLoad(_) | ClassifierError::ModelNotReady => Stage::Idle,
            ClassifierError::ImageDecode(_) => Stage::Decoding,
            ClassifierError::Preprocessing(_) => Stage::Preprocessing,
            ClassifierError::Inference(_) => Stage::Invoking,
        }
    }
}
