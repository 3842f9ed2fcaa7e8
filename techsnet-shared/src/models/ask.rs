use serde::{Deserialize, Serialize};

/// Substring the backend puts in a 403 body once the query allowance is used up.
pub const QUOTA_EXCEEDED_MARKER: &str = "Query limit reached";

/// Response body of `POST /ask`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    /// Free-text answer, parsed client-side by [`crate::workaround::parse`].
    #[serde(default)]
    pub response: Option<String>,

    /// Upstream failure reported with a success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Whether a failed `/ask` call means "quota exhausted" rather than a generic error.
#[must_use]
pub fn is_quota_exceeded(status: u16, body: &str) -> bool {
    status == 403 && body.contains(QUOTA_EXCEEDED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_requires_forbidden_status_and_marker() {
        let body = r#"{"detail":"Query limit reached. Upgrade to continue."}"#;
        assert!(is_quota_exceeded(403, body));
        assert!(!is_quota_exceeded(500, body));
        assert!(!is_quota_exceeded(403, r#"{"detail":"Forbidden"}"#));
    }

    #[test]
    fn ask_response_tolerates_missing_fields() {
        let response: AskResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, AskResponse::default());

        let response: AskResponse =
            serde_json::from_str(r#"{"response":"Workaround 1:","model":"gpt"}"#).unwrap();
        assert_eq!(response.response.as_deref(), Some("Workaround 1:"));
    }
}
