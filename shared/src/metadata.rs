use crate::labels::LabelSet;
use serde_json::Value;

pub const DEFAULT_IMAGE_SIZE: u32 = 224;
/// Largest square input side accepted from metadata.
pub const MAX_IMAGE_SIZE: u32 = 4096;

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Failed to fetch model metadata: {0}")]
    Fetch(String),
    #[error("Failed to parse model metadata: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Labels and input resolution that accompany a model bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetadata {
    pub labels: LabelSet,
    pub image_size: u32,
}

impl Default for ModelMetadata {
    fn default() -> Self {
        Self {
            labels: LabelSet::absent(),
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl ModelMetadata {
    /// Parses a metadata document.
    ///
    /// Only malformed JSON is an error. Recognized fields are `labels`
    /// (falling back to `metadata.labels`) and `imageSize` (falling back to
    /// `inputShape`); anything missing or of the wrong type takes the default.
    pub fn from_json(bytes: &[u8]) -> Result<Self, MetadataError> {
        let doc: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(&doc))
    }

    pub fn from_value(doc: &Value) -> Self {
        let labels = label_list(doc.get("labels"))
            .or_else(|| label_list(doc.get("metadata").and_then(|m| m.get("labels"))))
            .map(LabelSet::new)
            .unwrap_or_default();

        let image_size = positive_size(doc.get("imageSize"))
            .or_else(|| positive_size(doc.get("inputShape")))
            .unwrap_or(DEFAULT_IMAGE_SIZE);

        Self { labels, image_size }
    }

    /// Resolves a metadata load attempt, swallowing failures into defaults.
    pub fn or_default_logged(result: Result<Self, MetadataError>) -> Self {
        match result {
            Ok(meta) => meta,
            Err(e) => {
                log::warn!("{}; using default labels and {}px input", e, DEFAULT_IMAGE_SIZE);
                Self::default()
            }
        }
    }
}

// Non-string entries keep their slot so positions stay aligned with the
// output vector; they resolve to the numeric index later.
fn label_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .map(|item| item.as_str().unwrap_or_default().to_string())
            .collect(),
    )
}

fn positive_size(value: Option<&Value>) -> Option<u32> {
    value?
        .as_u64()
        .filter(|&n| n > 0 && n <= u64::from(MAX_IMAGE_SIZE))
        .and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_top_level_fields() {
        let meta =
            ModelMetadata::from_json(br#"{"labels":["Normal","Dry","Oily"],"imageSize":192}"#)
                .unwrap();
        assert_eq!(meta.labels.as_slice(), ["Normal", "Dry", "Oily"]);
        assert_eq!(meta.image_size, 192);
    }

    #[test]
    fn falls_back_to_nested_labels_and_input_shape() {
        let meta = ModelMetadata::from_json(
            br#"{"metadata":{"labels":["Oily","Combination"]},"inputShape":96}"#,
        )
        .unwrap();
        assert_eq!(meta.labels.as_slice(), ["Oily", "Combination"]);
        assert_eq!(meta.image_size, 96);
    }

    #[test]
    fn top_level_labels_win_over_nested() {
        let meta = ModelMetadata::from_json(
            br#"{"labels":["A"],"metadata":{"labels":["B"]},"imageSize":64,"inputShape":32}"#,
        )
        .unwrap();
        assert_eq!(meta.labels.as_slice(), ["A"]);
        assert_eq!(meta.image_size, 64);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let meta = ModelMetadata::from_json(br#"{"tfjsVersion":"1.3.1"}"#).unwrap();
        assert!(meta.labels.is_absent());
        assert_eq!(meta.image_size, DEFAULT_IMAGE_SIZE);
        assert_eq!(meta, ModelMetadata::default());
    }

    #[test]
    fn wrongly_typed_fields_take_defaults() {
        let meta =
            ModelMetadata::from_json(br#"{"labels":"Dry","imageSize":"224","inputShape":0}"#)
                .unwrap();
        assert!(meta.labels.is_absent());
        assert_eq!(meta.image_size, DEFAULT_IMAGE_SIZE);
    }

    #[test]
    fn oversized_sizes_are_ignored() {
        let meta = ModelMetadata::from_json(
            br#"{"labels":["Dry"],"imageSize":4000000000,"inputShape":128}"#,
        )
        .unwrap();
        assert_eq!(meta.image_size, 128);

        let meta = ModelMetadata::from_json(br#"{"imageSize":4097}"#).unwrap();
        assert_eq!(meta.image_size, DEFAULT_IMAGE_SIZE);

        let meta = ModelMetadata::from_json(br#"{"imageSize":4096}"#).unwrap();
        assert_eq!(meta.image_size, MAX_IMAGE_SIZE);
    }

    #[test]
    fn non_string_labels_keep_their_position() {
        let meta = ModelMetadata::from_json(br#"{"labels":["Normal",3,"Oily"]}"#).unwrap();
        assert_eq!(meta.labels.resolve(1), "1");
        assert_eq!(meta.labels.resolve(2), "Oily");
    }

    #[test]
    fn malformed_json_is_an_error_and_recovers_to_defaults() {
        let result = ModelMetadata::from_json(b"<html>not found</html>");
        assert!(matches!(result, Err(MetadataError::Parse(_))));
        assert_eq!(ModelMetadata::or_default_logged(result), ModelMetadata::default());
    }
}
