//! Error types for the Qdrant REST client.

use thiserror::Error;

/// Errors that can occur when talking to a Qdrant server.
///
/// Server-reported failures are only surfaced as [`QdrantError::Api`] when the
/// client was built with `raise_on_error`; otherwise the error document is
/// returned to the caller like any other response body.
#[derive(Error, Debug)]
pub enum QdrantError {
    /// The server returned a non-2xx status and raise-on-error is enabled.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// A network or transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing a downloaded snapshot failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration (non-base URL, bad API key header, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The base URL given to the builder does not parse.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl QdrantError {
    /// HTTP status carried by an [`QdrantError::Api`] error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            QdrantError::Api { status, .. } => Some(*status),
            QdrantError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convenience type alias for client results.
pub type QdrantResult<T> = Result<T, QdrantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = QdrantError::Api {
            status: 404,
            message: "collection not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): collection not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = QdrantError::Config("missing url".to_string());
        assert_eq!(err.status(), None);
    }
}
