//! Client error taxonomy.
//!
//! Every failed call surfaces as exactly one of these kinds, so callers
//! can branch on transport faults versus application-level failures.

use std::time::Duration;

use thiserror::Error;

pub type VisionResult<T> = Result<T, VisionError>;

#[derive(Debug, Error)]
pub enum VisionError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The service could not be reached (connection refused, unroutable
    /// host, malformed URL).
    #[error("connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 404: the capability URL does not exist on this server,
    /// usually a capability or API-version mismatch rather than an outage.
    #[error("endpoint not found (HTTP 404): {url}")]
    EndpointNotFound { url: String },

    /// Any other non-200 status.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// HTTP 200 but the service reported failure in the response envelope.
    #[error("service error: {0}")]
    Service(String),

    /// The response body was not valid JSON, or did not match the
    /// envelope shape.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response was valid JSON but missing the field this capability
    /// returns.
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}

impl VisionError {
    /// True for transport-level faults a caller may reasonably retry.
    ///
    /// The client itself never retries; retry policy belongs to the
    /// caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VisionError::Timeout { .. } | VisionError::Connection { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(VisionError::Timeout { timeout: Duration::from_secs(8) }.is_retryable());
        assert!(!VisionError::Service("busy".to_string()).is_retryable());
        assert!(!VisionError::EndpointNotFound { url: "http://localhost:80/v1/vision/face".to_string() }
            .is_retryable());
        assert!(!VisionError::HttpStatus { status: 500, url: String::new() }.is_retryable());
    }

    #[test]
    fn test_timeout_message_names_duration() {
        let err = VisionError::Timeout { timeout: Duration::from_secs(8) };
        assert!(err.to_string().contains("8s"));
    }

    #[test]
    fn test_not_found_message_names_url() {
        let err = VisionError::EndpointNotFound {
            url: "http://localhost:80/v1/vision/scene".to_string(),
        };
        assert!(err.to_string().contains("/v1/vision/scene"));
    }
}
