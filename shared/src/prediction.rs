use serde::{Deserialize, Serialize};

use crate::labels::{LabelSet, argmax};
use crate::tips::tip_for_label;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "type")]
    pub label: String,
    pub confidence: f32,
    pub raw: Vec<f32>,
    pub tip: String,
}

impl PredictionResult {
    /// Picks the best class from a flat score vector. Returns `None` for an
    /// empty vector. The winning score is reported as-is; no softmax is applied.
    pub fn from_scores(scores: Vec<f32>, labels: &LabelSet) -> Option<Self> {
        let (index, confidence) = argmax(&scores)?;
        let label = labels.resolve(index);
        let tip = tip_for_label(&label).to_string();
        Some(Self {
            label,
            confidence,
            raw: scores,
            tip,
        })
    }

    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_percent(&self) -> i64 {
        (f64::from(self.confidence) * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tips::FALLBACK_TIP;

    fn skin_labels() -> LabelSet {
        LabelSet::new(vec!["Normal".into(), "Dry".into(), "Oily".into()])
    }

    #[test]
    fn builds_result_from_scores() {
        let result = PredictionResult::from_scores(vec![0.1, 0.7, 0.2], &skin_labels()).unwrap();
        assert_eq!(result.label, "Dry");
        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.raw, vec![0.1, 0.7, 0.2]);
        assert_eq!(result.tip, "Use hydrating serums and rich moisturizers twice daily.");
    }

    #[test]
    fn numeric_label_gets_fallback_tip() {
        let result = PredictionResult::from_scores(vec![0.3, 0.6], &LabelSet::absent()).unwrap();
        assert_eq!(result.label, "1");
        assert_eq!(result.tip, FALLBACK_TIP);
    }

    #[test]
    fn empty_scores_yield_nothing() {
        assert!(PredictionResult::from_scores(Vec::new(), &skin_labels()).is_none());
    }

    #[test]
    fn percent_is_rounded() {
        let mut result = PredictionResult::from_scores(vec![0.7], &skin_labels()).unwrap();
        assert_eq!(result.confidence_percent(), 70);
        result.confidence = 0.125;
        assert_eq!(result.confidence_percent(), 13);
        result.confidence = 0.994;
        assert_eq!(result.confidence_percent(), 99);
        result.confidence = -0.125;
        assert_eq!(result.confidence_percent(), -13);
    }

    #[test]
    fn serializes_label_as_type() {
        let result = PredictionResult::from_scores(vec![0.1, 0.7, 0.2], &skin_labels()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "Dry");
        assert!(json.get("label").is_none());
    }
}
