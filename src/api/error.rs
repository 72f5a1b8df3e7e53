//! API Error Kind
//!
//! One small enum for everything that can go wrong at the backend boundary.
//! The UI only ever displays `to_string()`, but callers that need to can
//! still tell a transport failure from a rejected request or a bad body.

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status. `detail` is the
    /// backend-supplied message when one was present, otherwise a generic
    /// fallback. Display shows the detail alone so the UI can surface it
    /// verbatim next to the triggering control.
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// The response body was not the JSON we expected.
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code of the failed response, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_detail_verbatim() {
        let err = ApiError::Http {
            status: 500,
            detail: "Instagram login failed".to_string(),
        };
        assert_eq!(err.to_string(), "Instagram login failed");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_network_error_is_prefixed() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.status(), None);
    }
}
