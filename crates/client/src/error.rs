//! Errors for the REST API client.

use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The session token is missing, expired, or rejected (HTTP 401).
    ///
    /// Callers should clear the stored token and re-authenticate.
    #[error("unauthorized, please log in again")]
    Unauthorized,

    /// Resource not found (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend (HTTP 429).
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Any other non-success response, with the server's message when it
    /// sent one.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the status reason.
        message: String,
    },

    /// The login response carried no token under any known field.
    #[error("login succeeded but the response carried no token")]
    MissingToken,
}

/// Result type alias for [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::NotFound("/products/99".to_owned());
        assert_eq!(err.to_string(), "not found: /products/99");

        let err = ApiError::Api {
            status: 409,
            message: "email already registered".to_owned(),
        };
        assert_eq!(err.to_string(), "API error (409): email already registered");

        assert_eq!(
            ApiError::RateLimited(3).to_string(),
            "rate limited, retry after 3 seconds"
        );
    }
}
