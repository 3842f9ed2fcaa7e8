use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of characters of a question shown in the history list.
pub const PREVIEW_CHARS: usize = 100;

/// A previously submitted question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub query: String,
    #[serde(default)]
    pub community: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub images_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HistoryEntry {
    /// The question, cut to [`PREVIEW_CHARS`] characters with a trailing ellipsis.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.query.chars().count() > PREVIEW_CHARS {
            let cut: String = self.query.chars().take(PREVIEW_CHARS).collect();
            format!("{cut}...")
        } else {
            self.query.clone()
        }
    }

    /// Whether the backend stored an answer for this question.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.response
            .as_deref()
            .is_some_and(|response| !response.trim().is_empty())
    }

    /// Attachment badge text, `None` when nothing was attached.
    #[must_use]
    pub fn images_label(&self) -> Option<String> {
        match self.images_count {
            0 => None,
            1 => Some("1 image".to_string()),
            n => Some(format!("{n} images")),
        }
    }

    /// Creation time formatted for display, or `N/A`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp)
            .map_or_else(
                || "N/A".to_string(),
                |stamp| stamp.format("%Y-%m-%d %H:%M").to_string(),
            )
    }
}

/// Accepts RFC 3339 as well as the naive ISO form the backend emits for
/// timestamps stored without an offset.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Response of `GET /history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub queries: Vec<HistoryEntry>,
}

impl HistoryResponse {
    /// Count line shown above the list, e.g. `1 query found`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.queries.len() {
            1 => "1 query found".to_string(),
            n => format!("{n} queries found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(query: &str) -> HistoryEntry {
        HistoryEntry {
            id: "abc".to_string(),
            query: query.to_string(),
            community: "java".to_string(),
            response: None,
            images_count: 0,
            created_at: None,
        }
    }

    #[test]
    fn decodes_backend_shape() {
        let json = r#"{"queries":[{"_id":"1","query":"Why?","community":"sql","response":"Workaround 1:","images_count":2,"created_at":"2024-05-08T10:15:30.123456"}]}"#;
        let history: HistoryResponse = serde_json::from_str(json).unwrap();
        let first = &history.queries[0];
        assert!(first.is_answered());
        assert_eq!(first.images_label().as_deref(), Some("2 images"));
        assert_eq!(first.display_date(), "2024-05-08 10:15");
        assert_eq!(history.summary(), "1 query found");
    }

    #[test]
    fn preview_truncates_long_questions() {
        let long = "x".repeat(150);
        let preview = entry(&long).preview();
        assert_eq!(preview.len(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));

        assert_eq!(entry("short").preview(), "short");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let accented = "é".repeat(PREVIEW_CHARS);
        assert_eq!(entry(&accented).preview(), accented);
    }

    #[test]
    fn display_date_handles_rfc3339_and_garbage() {
        let mut item = entry("q");
        item.created_at = Some("2024-05-08T10:15:30Z".to_string());
        assert_eq!(item.display_date(), "2024-05-08 10:15");

        item.created_at = Some("yesterday".to_string());
        assert_eq!(item.display_date(), "N/A");

        item.created_at = None;
        assert_eq!(item.display_date(), "N/A");
    }

    #[test]
    fn images_label_pluralises() {
        let mut item = entry("q");
        assert_eq!(item.images_label(), None);
        item.images_count = 1;
        assert_eq!(item.images_label().as_deref(), Some("1 image"));
    }

    #[test]
    fn summary_pluralises() {
        let history = HistoryResponse::default();
        assert_eq!(history.summary(), "0 queries found");
    }
}
