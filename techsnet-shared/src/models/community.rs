use serde::{Deserialize, Serialize};

/// A knowledge-sharing community listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Community {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<u64>,
}

/// One page of `GET /communities?search=&page=&limit=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityPage {
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default, rename = "hasMore")]
    pub has_more: bool,
}

/// Body of `POST /request-community`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestCommunityRequest {
    pub name: String,
}

/// Response of `POST /request-community`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestCommunityResponse {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub created: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_camel_case_has_more() {
        let page: CommunityPage =
            serde_json::from_str(r#"{"communities":[{"name":"Java"}],"hasMore":false}"#).unwrap();
        assert_eq!(page.communities.len(), 1);
        assert_eq!(page.communities[0].name, "Java");
        assert!(!page.has_more);
    }

    #[test]
    fn request_response_defaults_to_false() {
        let response: RequestCommunityResponse = serde_json::from_str(r#"{"created":true}"#).unwrap();
        assert!(response.created);
        assert!(!response.exists);
    }
}
