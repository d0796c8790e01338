//! Data models for the vision service client.
//!
//! This crate provides Serde-deserializable types for:
//! - Object and face predictions with pixel bounding boxes
//! - Scene classification results
//! - Pure post-processing over prediction lists (labels, summaries,
//!   matched identities, confidence arithmetic)

pub mod analysis;
pub mod bounds;
pub mod confidence;
pub mod prediction;

// Re-export common types
pub use bounds::BoundingBox;
pub use prediction::{FacePrediction, ObjectPrediction, SceneResult, UNKNOWN_IDENTITY};
