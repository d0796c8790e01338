//! Confidence arithmetic shared by the post-processing helpers.

/// Convert a raw confidence in [0, 1] to a percentage rounded to one
/// decimal place.
///
/// Input is assumed to be in [0, 1] and is not clamped; out-of-range input
/// produces out-of-range output.
pub fn to_percent(raw: f64) -> f64 {
    (raw * 1000.0).round() / 10.0
}

/// Keep the confidences at or above `threshold`, preserving order.
///
/// The boundary is inclusive. Reapplying the same threshold is a no-op.
pub fn above_threshold(confidences: &[f64], threshold: f64) -> Vec<f64> {
    confidences.iter().copied().filter(|c| *c >= threshold).collect()
}
