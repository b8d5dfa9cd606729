use std::fmt;
use std::fs;
use std::path::Path;

use shared::{LabelSet, METADATA_FILE, MODEL_FILE, MetadataError, ModelMetadata};

use crate::error::ClassifierError;
use crate::runtime::{Classifier, OnnxClassifier};

/// A loaded model together with its labels and square input resolution.
/// Read-only once built.
pub struct ModelBundle {
    model: Box<dyn Classifier>,
    labels: LabelSet,
    resolution: u32,
}

impl fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBundle")
            .field("backend", &self.model.backend())
            .field("labels", &self.labels)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl ModelBundle {
    pub fn assemble(model: Box<dyn Classifier>, metadata: ModelMetadata) -> Self {
        Self {
            model,
            labels: metadata.labels,
            resolution: metadata.image_size,
        }
    }

    /// Builds a bundle from a fetched ONNX artifact and the outcome of the
    /// metadata fetch. Metadata problems are logged and replaced by defaults;
    /// only the model itself can fail the load.
    pub fn from_bytes(
        model_bytes: &[u8],
        metadata: Result<Vec<u8>, String>,
    ) -> Result<Self, ClassifierError> {
        let metadata = ModelMetadata::or_default_logged(
            metadata
                .map_err(MetadataError::Fetch)
                .and_then(|bytes| ModelMetadata::from_json(&bytes)),
        );
        let model = OnnxClassifier::from_bytes(model_bytes, metadata.image_size)?;
        let bundle = Self::assemble(Box::new(model), metadata);
        log::info!(
            "Loaded model bundle: {} labels, {}px input",
            bundle.labels.len(),
            bundle.resolution
        );
        Ok(bundle)
    }

    /// Reads `model.onnx` and `metadata.json` from a bundle directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let dir = dir.as_ref();
        let model_path = dir.join(MODEL_FILE);
        let model_bytes = fs::read(&model_path).map_err(|e| {
            ClassifierError::ModelLoad(format!("{}: {}", model_path.display(), e))
        })?;

        let metadata_path = dir.join(METADATA_FILE);
        let metadata =
            fs::read(&metadata_path).map_err(|e| format!("{}: {}", metadata_path.display(), e));

        Self::from_bytes(&model_bytes, metadata)
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.model.as_ref()
    }
}
