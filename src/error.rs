//! Error types surfaced by the client.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a call can produce. Every operation yields either a typed
/// response or exactly one of these; nothing is swallowed or retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be completed (connection refused, DNS failure,
    /// timeout, interrupted body read).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A domain value could not be serialized to JSON.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The API rejected the request with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A request value failed validation before any network call was made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A downloaded file could not be written to disk.
    #[error("failed to write downloaded file: {0}")]
    Io(#[from] std::io::Error),
}

/// A non-2xx response, carrying the HTTP status and the decoded error detail
/// when the body was a valid error payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error (HTTP {status}), code {code}: {description}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Error code reported in the response body. 404 responses carry no
    /// structured body, so the status is used; 0 means the body could not be
    /// decoded as an error payload.
    pub code: i64,
    pub description: String,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_description() {
        let error = ApiError {
            status: 401,
            code: 401,
            description: "Unauthorized".to_string(),
            errors: vec![],
        };

        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Unauthorized"));
    }

    #[test]
    fn invalid_request_display() {
        let error = Error::InvalidRequest("page must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "invalid request: page must be greater than 0"
        );
    }

    #[test]
    fn api_error_converts_into_error() {
        let error: Error = ApiError {
            status: 500,
            code: 500,
            description: "Internal Server Error".to_string(),
            errors: vec!["boom".to_string()],
        }
        .into();

        assert!(matches!(error, Error::Api(e) if e.status == 500));
    }
}
