//! Response Normalization
//!
//! Pure translation of an HTTP status plus body text into a `Result`, kept
//! free of gloo-net so it can be unit tested off the browser. All four
//! endpoint wrappers in `client` funnel through these two functions.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// Fallback message when a failed response carries no usable `detail`.
pub const GENERIC_ERROR_DETAIL: &str = "An unknown error occurred with the API request.";

/// Error body the backend sends on failure (FastAPI convention).
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract the failure message from a non-success response body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| GENERIC_ERROR_DETAIL.to_string())
}

/// Normalize a response into an opaque JSON value.
///
/// - non-2xx: `ApiError::Http` carrying the backend `detail` when present,
///   the generic fallback otherwise.
/// - 204 or an empty success body: `Value::Null`, no parse attempt.
/// - anything else: the parsed JSON body.
pub fn decode_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Http {
            status,
            detail: error_detail(body),
        });
    }
    if status == 204 || body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Normalize a response into a typed value. Used by endpoints with a known
/// success shape; these always carry a body, so 204 is not special-cased.
pub fn decode_typed<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Http {
            status,
            detail: error_detail(body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ClusteringResult;

    #[test]
    fn test_failure_with_detail_uses_detail_as_message() {
        let err = decode_response(500, r#"{"detail": "No .eml files found"}"#).unwrap_err();
        assert_eq!(err.to_string(), "No .eml files found");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_failure_without_body_falls_back_to_generic_message() {
        let err = decode_response(502, "").unwrap_err();
        assert_eq!(err.to_string(), GENERIC_ERROR_DETAIL);
    }

    #[test]
    fn test_failure_with_unparsable_body_falls_back_to_generic_message() {
        let err = decode_response(500, "<html>Internal Server Error</html>").unwrap_err();
        assert_eq!(err.to_string(), GENERIC_ERROR_DETAIL);

        // A JSON body without a `detail` field degrades the same way.
        let err = decode_response(422, r#"{"error": "nope"}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_ERROR_DETAIL);
    }

    #[test]
    fn test_no_content_yields_null_without_parsing() {
        assert_eq!(decode_response(204, "").unwrap(), Value::Null);
        // Even a stray body on a 204 is never parsed.
        assert_eq!(decode_response(204, "not json").unwrap(), Value::Null);
    }

    #[test]
    fn test_success_body_is_parsed() {
        let value = decode_response(200, r#"{"message": "Email scraping completed successfully."}"#)
            .unwrap();
        assert_eq!(value["message"], "Email scraping completed successfully.");
    }

    #[test]
    fn test_malformed_success_body_is_a_decode_error() {
        let err = decode_response(200, "{truncated").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_typed_decode_of_clustering_result() {
        let body = r#"{"clusters":[{"cluster_id":0,"clubs":[{"rank":1,"name":"Rhythm","total_engagement_score":0.5}]}],"outliers":[]}"#;
        let result: ClusteringResult = decode_typed(200, body).unwrap();
        assert_eq!(result.clusters[0].clubs[0].name, "Rhythm");
    }

    #[test]
    fn test_typed_decode_propagates_http_detail() {
        let err = decode_typed::<ClusteringResult>(500, r#"{"detail": "clustering failed"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "clustering failed");
    }
}
