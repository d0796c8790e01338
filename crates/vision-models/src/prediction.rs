//! Prediction types returned by the vision service.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;

/// Reserved identity the service returns when a detected face matches no
/// registered person.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// One detected object instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPrediction {
    /// Class label assigned by the model
    pub label: String,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
    /// Pixel bounding box of the detection
    #[serde(flatten)]
    pub bounds: BoundingBox,
}

/// One detected face.
///
/// Plain face detection returns no identity; recognition fills `userid`
/// with either a registered identity or the `"unknown"` sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacePrediction {
    /// Matched identity, absent for plain detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
    /// Pixel bounding box of the face
    #[serde(flatten)]
    pub bounds: BoundingBox,
}

impl FacePrediction {
    /// Returns true if recognition matched a registered identity.
    pub fn is_matched(&self) -> bool {
        self.userid.as_deref().is_some_and(|id| id != UNKNOWN_IDENTITY)
    }
}

/// Scene classification result.
///
/// The scene endpoint classifies the whole image and returns a single
/// label rather than a prediction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneResult {
    /// Scene label assigned by the model
    pub label: String,
    /// Classification confidence in [0, 1]
    pub confidence: f64,
}
