//! HTTP client for a self-hosted vision analysis service.
//!
//! The service exposes object detection, face detection/registration/
//! recognition, and scene classification as multipart POST endpoints that
//! wrap every response in a `success`-flag envelope. This crate flattens
//! that envelope into a typed call contract: each operation performs one
//! request and returns either the capability's result shape or a single
//! [`VisionError`] kind the caller can branch on.

pub mod capability;
pub mod client;
pub mod config;
pub mod error;

pub use capability::Capability;
pub use client::VisionClient;
pub use config::ClientConfig;
pub use error::{VisionError, VisionResult};
