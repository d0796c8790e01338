//! Vision service HTTP client.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use vision_models::{FacePrediction, ObjectPrediction, SceneResult};

use crate::capability::Capability;
use crate::config::ClientConfig;
use crate::error::{VisionError, VisionResult};

/// Response envelope shared by every capability: a `success` flag plus the
/// capability-specific payload, with `error` populated on failure.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    body: Value,
}

/// Client for a self-hosted vision analysis service.
///
/// One instance holds only immutable configuration and a connection pool,
/// so sharing it across tasks is safe. Every operation performs exactly
/// one HTTP request, classifies the outcome into [`VisionError`], and
/// returns the capability-specific result shape. The client never retries;
/// retry policy belongs to the caller.
pub struct VisionClient {
    http: Client,
    config: ClientConfig,
}

impl VisionClient {
    /// Create a new client for the configured service.
    pub fn new(config: ClientConfig) -> VisionResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| VisionError::Connection {
                url: format!("http://{}:{}", config.host, config.port),
                source,
            })?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> VisionResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Detect objects with the service's built-in model.
    pub async fn detect_objects(&self, image: &[u8]) -> VisionResult<Vec<ObjectPrediction>> {
        let body = self.dispatch(&Capability::ObjectDetection, image, None).await?;
        predictions(body)
    }

    /// Detect objects with a named custom model deployed on the server.
    pub async fn detect_custom_objects(
        &self,
        model: &str,
        image: &[u8],
    ) -> VisionResult<Vec<ObjectPrediction>> {
        let capability = Capability::CustomObjectDetection {
            model: model.to_string(),
        };
        let body = self.dispatch(&capability, image, None).await?;
        predictions(body)
    }

    /// Detect faces without identity matching.
    pub async fn detect_faces(&self, image: &[u8]) -> VisionResult<Vec<FacePrediction>> {
        let body = self.dispatch(&Capability::FaceDetection, image, None).await?;
        predictions(body)
    }

    /// Recognize faces against the identities registered on the server.
    ///
    /// Unmatched faces come back with the `"unknown"` identity; see
    /// [`vision_models::analysis::matched_identities`] for filtering them.
    pub async fn recognize_faces(&self, image: &[u8]) -> VisionResult<Vec<FacePrediction>> {
        let body = self.dispatch(&Capability::FaceRecognition, image, None).await?;
        predictions(body)
    }

    /// Register a face image under `userid`.
    ///
    /// Returns the service's confirmation message. Registered identities
    /// live entirely on the server.
    pub async fn register_face(&self, userid: &str, image: &[u8]) -> VisionResult<String> {
        let body = self
            .dispatch(&Capability::FaceRegistration, image, Some(userid))
            .await?;
        match body.get("message").and_then(Value::as_str) {
            Some(message) => Ok(message.to_string()),
            None => Err(VisionError::InvalidResponse(
                "registration response missing `message`".to_string(),
            )),
        }
    }

    /// Classify the overall scene of the image.
    pub async fn recognize_scene(&self, image: &[u8]) -> VisionResult<SceneResult> {
        let body = self.dispatch(&Capability::SceneRecognition, image, None).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Shared request path: multipart POST, then outcome classification.
    ///
    /// On success returns the envelope body (everything except the
    /// `success` flag) for per-capability extraction. All faults are
    /// terminal for the call.
    async fn dispatch(
        &self,
        capability: &Capability,
        image: &[u8],
        userid: Option<&str>,
    ) -> VisionResult<Value> {
        let url = capability.url(&self.config);

        let mut form = Form::new().part("image", Part::bytes(image.to_vec()).file_name("image"));
        for (name, value) in capability.form_fields(&self.config, userid) {
            form = form.text(name, value);
        }

        debug!("Sending vision request to {}", url);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| self.classify_transport(source, &url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("Endpoint not found: {}", url);
            return Err(VisionError::EndpointNotFound { url });
        }
        if status != StatusCode::OK {
            warn!("Unexpected status {} from {}", status, url);
            return Err(VisionError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| self.classify_transport(source, &url))?;
        let envelope: Envelope = serde_json::from_str(&text)?;

        if !envelope.success {
            let reason = envelope
                .error
                .unwrap_or_else(|| "unspecified service error".to_string());
            warn!("Service reported failure for {}: {}", url, reason);
            return Err(VisionError::Service(reason));
        }

        Ok(envelope.body)
    }

    /// Map a transport error onto the fault taxonomy.
    fn classify_transport(&self, source: reqwest::Error, url: &str) -> VisionError {
        if source.is_timeout() {
            VisionError::Timeout {
                timeout: self.config.timeout,
            }
        } else {
            VisionError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Extract and decode the `predictions` array that every detection-style
/// capability returns.
fn predictions<T: serde::de::DeserializeOwned>(mut body: Value) -> VisionResult<Vec<T>> {
    match body.get_mut("predictions") {
        Some(list) => Ok(serde_json::from_value(list.take())?),
        None => Err(VisionError::InvalidResponse(
            "response missing `predictions`".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_flattens_payload() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": true,
            "label": "street",
            "confidence": 0.86745402
        }))
        .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.error, None);
        assert_eq!(envelope.body["label"], "street");
    }

    #[test]
    fn test_envelope_carries_service_error() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": false,
            "error": "busy"
        }))
        .unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("busy"));
    }

    #[test]
    fn test_predictions_extraction_requires_field() {
        let ok: Vec<ObjectPrediction> = predictions(json!({
            "predictions": [{
                "label": "person",
                "confidence": 0.7996547,
                "x_min": 405, "y_min": 0, "x_max": 639, "y_max": 652
            }]
        }))
        .unwrap();
        assert_eq!(ok.len(), 1);

        let missing = predictions::<ObjectPrediction>(json!({"duration": 0}));
        assert!(matches!(missing, Err(VisionError::InvalidResponse(_))));
    }
}
