use serde::{Deserialize, Serialize};

/// Class names aligned with the model's output vector.
///
/// `None` means the metadata carried no label list; every prediction then
/// falls back to the numeric class index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSet(Option<Vec<String>>);

impl LabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self(Some(labels))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[String] {
        self.0.as_deref().unwrap_or_default()
    }

    /// Label for `index`, or its decimal form when there is no usable entry.
    /// Empty strings count as missing.
    pub fn resolve(&self, index: usize) -> String {
        self.0
            .as_ref()
            .and_then(|labels| labels.get(index))
            .filter(|label| !label.is_empty())
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}

impl From<Vec<String>> for LabelSet {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

/// Index and value of the highest score.
///
/// Linear left-to-right scan with a strict comparison, so the lowest index
/// wins a tie and a NaN never replaces the current best.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let (&first, rest) = scores.split_first()?;
    let mut best_idx = 0;
    let mut best_val = first;
    for (i, &v) in rest.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = i + 1;
        }
    }
    Some((best_idx, best_val))
}
