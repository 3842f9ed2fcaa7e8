use serde::{Deserialize, Serialize};

/// Query allowance attached to a user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionUsage {
    /// Subscription status as reported by the backend (`active`, `free`, ...).
    pub status: String,

    /// Number of questions submitted in the current period.
    #[serde(default)]
    pub queries_used: u32,

    /// Number of questions allowed in the current period.
    #[serde(default)]
    pub query_limit: u32,
}

impl SubscriptionUsage {
    /// Questions left before the backend starts answering with a quota error.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.query_limit.saturating_sub(self.queries_used)
    }

    /// Whether the allowance is used up.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.query_limit > 0 && self.queries_used >= self.query_limit
    }
}

/// The signed-in user as far as the portal cares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name, when the identity provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The user's email address.
    pub email: String,

    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Current query allowance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionUsage>,
}

impl UserProfile {
    /// Builds a minimal profile from token claims.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            name,
            email: email.into(),
            picture: None,
            subscription: None,
        }
    }

    /// Name to show in the header, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Response body of `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_with_only_email() {
        let profile: UserProfile = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(profile.email, "a@b.com");
        assert!(profile.name.is_none());
        assert!(profile.subscription.is_none());
    }

    #[test]
    fn profile_serialization_skips_absent_fields() {
        let profile = UserProfile::new("a@b.com", None);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com"}"#);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut profile = UserProfile::new("a@b.com", Some("  ".to_string()));
        assert_eq!(profile.display_name(), "a@b.com");
        profile.name = Some("Ada".to_string());
        assert_eq!(profile.display_name(), "Ada");
    }

    #[test]
    fn me_response_wraps_user() {
        let json = r#"{"user":{"name":"Ada","email":"ada@example.com","subscription":{"status":"free","queries_used":3,"query_limit":5}}}"#;
        let response: MeResponse = serde_json::from_str(json).unwrap();
        let usage = response.user.subscription.unwrap();
        assert_eq!(usage.remaining(), 2);
        assert!(!usage.is_exhausted());
    }

    #[test]
    fn usage_exhaustion() {
        let usage = SubscriptionUsage {
            status: "free".to_string(),
            queries_used: 7,
            query_limit: 5,
        };
        assert_eq!(usage.remaining(), 0);
        assert!(usage.is_exhausted());

        let unlimited = SubscriptionUsage {
            status: "active".to_string(),
            queries_used: 7,
            query_limit: 0,
        };
        assert!(!unlimited.is_exhausted());
    }
}
