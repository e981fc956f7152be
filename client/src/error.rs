//! Error types for the document QA service client

use thiserror::Error;

/// Errors that can occur when talking to the document QA service
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// Response body could not be read or decoded
    #[error("Response parsing failed: {0}")]
    Parse(String),

    /// Service answered with a non-success status
    ///
    /// `message` carries the body's `error` field when the service provided
    /// one; callers supply their own fallback text when it is absent.
    #[error("Service error (status {status}): {}", .message.as_deref().unwrap_or("no error message"))]
    Service {
        /// HTTP status code
        status: u16,
        /// Error message reported by the service, if any
        message: Option<String>,
    },
}

impl ApiError {
    /// The user-facing reason for this error
    ///
    /// Resolution order matches the page behaviour: the service's reported
    /// error string when present, else the given fallback for a message-less
    /// service error, else the underlying failure's description.
    #[must_use]
    pub fn reason(&self, fallback: &str) -> String {
        match self {
            Self::Service {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Service { message: None, .. } => fallback.to_string(),
            Self::Request(detail) | Self::Parse(detail) => detail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_prefers_service_message() {
        let error = ApiError::Service {
            status: 422,
            message: Some("bad pdf".to_string()),
        };
        assert_eq!(error.reason("Unknown upload error"), "bad pdf");
    }

    #[test]
    fn test_reason_falls_back_when_service_message_missing() {
        let error = ApiError::Service {
            status: 500,
            message: None,
        };
        assert_eq!(
            error.reason("Unknown upload error"),
            "Unknown upload error"
        );
    }

    #[test]
    fn test_reason_uses_transport_detail() {
        let error = ApiError::Request("timeout".to_string());
        assert_eq!(error.reason("Unknown upload error"), "timeout");
    }
}
