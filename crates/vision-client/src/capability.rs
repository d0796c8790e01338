//! Capability table: URL templates and form fields per remote operation.

use crate::config::ClientConfig;

/// One remote operation the vision service exposes.
///
/// Capabilities differ only in data, not control flow: each maps to a
/// fixed URL path, a fixed set of auxiliary form fields, and one
/// response-extraction rule in the client. The set is closed, so it is an
/// enum matched exhaustively rather than a type per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Object detection with the built-in model
    ObjectDetection,
    /// Object detection against a named custom model
    CustomObjectDetection {
        /// Model name deployed on the server
        model: String,
    },
    /// Face detection without identity matching
    FaceDetection,
    /// Register a face image under an identity
    FaceRegistration,
    /// Face recognition against registered identities
    FaceRecognition,
    /// Whole-image scene classification
    SceneRecognition,
}

impl Capability {
    /// URL path of this capability's endpoint.
    pub fn path(&self) -> String {
        match self {
            Capability::ObjectDetection => "/v1/vision/detection".to_string(),
            Capability::CustomObjectDetection { model } => format!("/v1/vision/custom/{model}"),
            Capability::FaceDetection => "/v1/vision/face".to_string(),
            Capability::FaceRegistration => "/v1/vision/face/register".to_string(),
            Capability::FaceRecognition => "/v1/vision/face/recognize".to_string(),
            Capability::SceneRecognition => "/v1/vision/scene".to_string(),
        }
    }

    /// Full request URL against the configured host and port.
    pub fn url(&self, config: &ClientConfig) -> String {
        format!("http://{}:{}{}", config.host, config.port, self.path())
    }

    /// Auxiliary multipart text fields sent alongside the image.
    ///
    /// `api_key` is always present, possibly empty. Detection-style
    /// capabilities carry `min_confidence`; registration instead carries
    /// the identity being registered.
    pub fn form_fields(
        &self,
        config: &ClientConfig,
        userid: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut fields = vec![("api_key", config.api_key.clone())];
        match self {
            Capability::FaceRegistration => {
                if let Some(userid) = userid {
                    fields.push(("userid", userid.to_string()));
                }
            }
            _ => fields.push(("min_confidence", config.min_confidence.to_string())),
        }
        fields
    }
}
