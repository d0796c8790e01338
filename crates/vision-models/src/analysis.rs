//! Post-processing over decoded prediction lists.
//!
//! Pure functions over the typed predictions the client returns:
//! - Label extraction and per-label confidence grouping
//! - Summary counts per label
//! - Matched-identity extraction for face recognition

use std::collections::BTreeMap;

use crate::confidence::to_percent;
use crate::prediction::{FacePrediction, ObjectPrediction, UNKNOWN_IDENTITY};

/// Distinct labels present in `predictions`, sorted for deterministic
/// output.
pub fn unique_labels(predictions: &[ObjectPrediction]) -> Vec<String> {
    let mut labels: Vec<String> = predictions.iter().map(|p| p.label.clone()).collect();
    labels.sort();
    labels.dedup();
    labels
}

/// Confidences of the predictions carrying `label`, in source order.
///
/// Empty when no prediction carries the label.
pub fn confidences_for_label(predictions: &[ObjectPrediction], label: &str) -> Vec<f64> {
    predictions
        .iter()
        .filter(|p| p.label == label)
        .map(|p| p.confidence)
        .collect()
}

/// Number of predictions per label. The counts sum to `predictions.len()`.
pub fn summary(predictions: &[ObjectPrediction]) -> BTreeMap<String, usize> {
    unique_labels(predictions)
        .into_iter()
        .map(|label| {
            let count = confidences_for_label(predictions, &label).len();
            (label, count)
        })
        .collect()
}

/// Identities that recognition matched, mapped to their confidence as a
/// percentage with one decimal place.
///
/// Entries without an identity and entries carrying the reserved
/// `"unknown"` sentinel are excluded. Should the service repeat an
/// identity within one image, the last occurrence wins.
pub fn matched_identities(predictions: &[FacePrediction]) -> BTreeMap<String, f64> {
    predictions
        .iter()
        .filter_map(|p| match p.userid.as_deref() {
            Some(id) if id != UNKNOWN_IDENTITY => Some((id.to_string(), to_percent(p.confidence))),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;

    fn object(label: &str, confidence: f64) -> ObjectPrediction {
        ObjectPrediction {
            label: label.to_string(),
            confidence,
            bounds: BoundingBox::new(0, 0, 10, 10),
        }
    }

    fn face(userid: Option<&str>, confidence: f64) -> FacePrediction {
        FacePrediction {
            userid: userid.map(str::to_string),
            confidence,
            bounds: BoundingBox::new(0, 0, 10, 10),
        }
    }

    fn sample_objects() -> Vec<ObjectPrediction> {
        vec![
            object("person", 0.6998661),
            object("person", 0.7996547),
            object("dog", 0.59745613),
        ]
    }

    #[test]
    fn test_unique_labels_sorted_and_deduped() {
        assert_eq!(unique_labels(&sample_objects()), vec!["dog", "person"]);
        assert!(unique_labels(&[]).is_empty());
    }

    #[test]
    fn test_confidences_for_label_in_source_order() {
        let predictions = sample_objects();
        assert_eq!(
            confidences_for_label(&predictions, "person"),
            vec![0.6998661, 0.7996547]
        );
        assert!(confidences_for_label(&predictions, "cat").is_empty());
    }

    #[test]
    fn test_summary_counts_per_label() {
        let counts = summary(&sample_objects());
        assert_eq!(counts.get("person"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_summary_counts_sum_to_input_length() {
        let predictions = sample_objects();
        let total: usize = summary(&predictions).values().sum();
        assert_eq!(total, predictions.len());
    }

    #[test]
    fn test_matched_identities_excludes_unknown() {
        let predictions = vec![face(Some("Idris Elba"), 0.74999994), face(Some("unknown"), 0.0)];
        let matched = matched_identities(&predictions);
        assert_eq!(matched.get("Idris Elba"), Some(&75.0));
        assert_eq!(matched.len(), 1);
        assert!(!matched.contains_key(UNKNOWN_IDENTITY));
    }

    #[test]
    fn test_matched_identities_skips_plain_detections() {
        let predictions = vec![face(None, 0.9999999)];
        assert!(matched_identities(&predictions).is_empty());
    }
}
