use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-success responses.
///
/// The backend reports failures as `{"detail": "..."}`; some endpoints use
/// `{"error": "..."}` instead, so both are accepted.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Alternative field used by a handful of endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Creates an error response carrying `detail`.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            error: None,
        }
    }

    /// Best-effort decode of a raw response body. Bodies that are not JSON
    /// are kept verbatim as the detail.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                Self::default()
            } else {
                Self::new(trimmed)
            }
        })
    }

    /// The message to show, or `"Unknown"` when the backend gave none.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Unknown")
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_detail_body() {
        let error = ErrorResponse::from_body(r#"{"detail":"Query limit reached"}"#);
        assert_eq!(error.message(), "Query limit reached");
    }

    #[test]
    fn decodes_error_body() {
        let error = ErrorResponse::from_body(r#"{"error":"boom"}"#);
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn plain_text_body_becomes_detail() {
        let error = ErrorResponse::from_body("  Bad Gateway \n");
        assert_eq!(error.detail.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn empty_body_reports_unknown() {
        let error = ErrorResponse::from_body("");
        assert_eq!(error.message(), "Unknown");
        assert_eq!(error.to_string(), "Unknown");
    }

    #[test]
    fn detail_wins_over_error() {
        let error = ErrorResponse {
            detail: Some("first".to_string()),
            error: Some("second".to_string()),
        };
        assert_eq!(error.message(), "first");
    }
}
