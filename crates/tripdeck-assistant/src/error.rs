//! Error types for the assistant pipeline.

use tripdeck_core::error::TripdeckError;

/// Failures from the assistant request client.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("could not reach the assistant backend at {endpoint}; verify it is running and reachable")]
    Unreachable { endpoint: String },

    #[error("the assistant backend rejected this origin; it must allow requests from the calling origin")]
    OriginRejected,

    #[error("assistant backend returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("assistant backend returned a malformed response")]
    MalformedResponse,
}

impl From<AssistantError> for TripdeckError {
    fn from(err: AssistantError) -> Self {
        TripdeckError::Assistant(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssistantError::Unreachable {
            endpoint: "http://localhost:5000".to_string(),
        };
        assert!(err.to_string().contains("http://localhost:5000"));
        assert!(err.to_string().contains("running and reachable"));

        let err = AssistantError::OriginRejected;
        assert!(err.to_string().contains("origin"));

        let err = AssistantError::BadStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "assistant backend returned status 502: bad gateway"
        );

        let err = AssistantError::MalformedResponse;
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_conversion_to_tripdeck_error() {
        let err: TripdeckError = AssistantError::MalformedResponse.into();
        assert!(matches!(err, TripdeckError::Assistant(_)));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_bad_status_preserves_body() {
        let err = AssistantError::BadStatus {
            status: 404,
            body: "{\"detail\": \"not found\"}".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("not found"));
    }
}
