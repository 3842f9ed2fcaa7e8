use crate::api::ApiError;
use crate::config::MAX_IMAGE_BYTES;
use shared::models::AskResponse;
use shared::workaround::{self, ParsedResponse};
use thiserror::Error;

/// Built-in communities offered by the question form, as `(value, label)`.
pub const COMMUNITY_OPTIONS: [(&str, &str); 8] = [
    ("java", "Java"),
    ("sap", "SAP ABAP"),
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("react", "React"),
    ("nodejs", "Node.js"),
    ("dotnet", ".NET"),
    ("sql", "SQL"),
];

/// Options for the community select. A preselected community that is not
/// one of the built-in ones (e.g. chosen in the directory) is appended.
pub fn community_options(selected: &str) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = COMMUNITY_OPTIONS
        .iter()
        .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
        .collect();
    let selected = selected.trim();
    let known = options
        .iter()
        .any(|(value, label)| value.eq_ignore_ascii_case(selected) || label == selected);
    if !selected.is_empty() && !known {
        options.push((selected.to_string(), selected.to_string()));
    }
    options
}

/// Maps a preselected community onto the value of its select option.
pub fn preselected_value(selected: &str) -> String {
    let selected = selected.trim();
    COMMUNITY_OPTIONS
        .iter()
        .find(|(value, label)| value.eq_ignore_ascii_case(selected) || *label == selected)
        .map_or_else(|| selected.to_string(), |(value, _)| (*value).to_string())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Image size should be less than 5MB ({name})")]
    TooLarge { name: String },
}

/// Rejects attachments above the size limit.
pub fn check_attachment(name: &str, size: f64) -> Result<(), AttachmentError> {
    if size > MAX_IMAGE_BYTES {
        return Err(AttachmentError::TooLarge {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Returns the trimmed question, or the message to show when there is none.
pub fn validate_question(query: &str) -> Result<String, &'static str> {
    let query = query.trim();
    if query.is_empty() {
        Err("Please enter a query")
    } else {
        Ok(query.to_string())
    }
}

/// Where the question view is in its request cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Submitting,
    Answered(ParsedResponse),
    /// The account has used its monthly allowance.
    QuotaExceeded,
    Failed(String),
}

impl QueryPhase {
    pub fn from_result(result: Result<AskResponse, ApiError>) -> Self {
        match result {
            Ok(AskResponse {
                error: Some(error), ..
            }) => Self::Failed(format!("Unable to get AI solutions: {error}")),
            Ok(AskResponse {
                response: Some(text),
                ..
            }) if !text.trim().is_empty() => Self::Answered(workaround::parse(&text)),
            Ok(_) => Self::Failed("Empty response from AI".to_string()),
            Err(err) if err.is_quota_exceeded() => Self::QuotaExceeded,
            Err(err) => {
                log::error!("question submission failed: {err}");
                Self::Failed(format!("Unable to get AI solutions: {err}"))
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl QueryPhase {
        fn error(&self) -> Option<&str> {
            match self {
                Self::Failed(message) => Some(message),
                _ => None,
            }
        }
    }

    #[test]
    fn forbidden_with_quota_marker_prompts_upgrade() {
        let error = ApiError::from_status(
            403,
            r#"{"detail":"Query limit reached. Upgrade your plan."}"#,
        );
        assert_eq!(QueryPhase::from_result(Err(error)), QueryPhase::QuotaExceeded);
    }

    #[test]
    fn other_failures_surface_a_message() {
        let error = ApiError::from_status(500, r#"{"detail":"boom"}"#);
        let phase = QueryPhase::from_result(Err(error));
        assert_eq!(
            phase.error(),
            Some("Unable to get AI solutions: Backend error 500: boom")
        );
    }

    #[test]
    fn backend_reported_error_fails() {
        let phase = QueryPhase::from_result(Ok(AskResponse {
            response: None,
            error: Some("model offline".into()),
        }));
        assert_eq!(phase.error(), Some("Unable to get AI solutions: model offline"));
    }

    #[test]
    fn blank_response_fails() {
        let phase = QueryPhase::from_result(Ok(AskResponse {
            response: Some("   ".into()),
            error: None,
        }));
        assert_eq!(phase.error(), Some("Empty response from AI"));
    }

    #[test]
    fn answer_is_parsed() {
        let text = "Workaround 1:\nProblem Statement: NPE on start\nSolution:\nStep 1: Check config\n";
        match QueryPhase::from_result(Ok(AskResponse {
            response: Some(text.into()),
            error: None,
        })) {
            QueryPhase::Answered(parsed) => assert!(parsed.is_structured()),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn empty_question_is_rejected() {
        assert_eq!(validate_question("  \n"), Err("Please enter a query"));
        assert_eq!(validate_question(" why? "), Ok("why?".to_string()));
    }

    #[test]
    fn attachment_limit_is_inclusive() {
        assert!(check_attachment("a.png", MAX_IMAGE_BYTES).is_ok());
        assert_eq!(
            check_attachment("big.png", MAX_IMAGE_BYTES + 1.0),
            Err(AttachmentError::TooLarge {
                name: "big.png".into()
            })
        );
    }

    #[test]
    fn directory_community_is_matched_or_appended() {
        assert_eq!(preselected_value("Java"), "java");
        assert_eq!(preselected_value("Rust"), "Rust");
        assert_eq!(community_options("Java").len(), COMMUNITY_OPTIONS.len());
        let options = community_options("Rust");
        assert_eq!(options.last(), Some(&("Rust".to_string(), "Rust".to_string())));
    }
}
