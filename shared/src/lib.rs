pub mod consent;
pub mod labels;
pub mod metadata;
pub mod prediction;
pub mod status;
pub mod tips;

pub use consent::{CONSENT_KEY, ConsentGate, ConsentStore, GateDecision, MemoryConsentStore};
pub use labels::{LabelSet, argmax};
pub use metadata::{DEFAULT_IMAGE_SIZE, MAX_IMAGE_SIZE, MetadataError, ModelMetadata};
pub use prediction::PredictionResult;
pub use status::{AnalysisStatus, analyze_enabled};
pub use tips::{FALLBACK_TIP, SkinType, tip_for_label};

/// Directory, relative to the served root, holding the model bundle.
pub const MODEL_BUNDLE_DIR: &str = "tm-my-image-model";
pub const MODEL_FILE: &str = "model.onnx";
pub const METADATA_FILE: &str = "metadata.json";
