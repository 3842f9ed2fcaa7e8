use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AskResponse, CommunityPage, ErrorResponse, HistoryResponse, MeResponse,
    PaymentIntentRequest, PaymentIntentResponse, Plan, RequestCommunityRequest,
    RequestCommunityResponse, SubscriptionRecord, UserProfile, is_quota_exceeded,
};
use shared::session::Verification;
use thiserror::Error;

thread_local! {
    static SHARED_CLIENT: OnceCell<TechsNetClient> = OnceCell::new();
}

/// Failure of a backend call, already classified for the views.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unable to connect to server")]
    Network(#[from] reqwest::Error),

    #[error("User not authenticated")]
    Unauthorized,

    #[error("{0}")]
    QuotaExceeded(String),

    #[error("Backend error {status}: {detail}")]
    Status { status: u16, detail: String },
}

impl ApiError {
    /// Classifies a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = ErrorResponse::from_body(body).message().to_string();
        if is_quota_exceeded(status, body) {
            Self::QuotaExceeded(detail)
        } else if status == StatusCode::UNAUTHORIZED.as_u16() {
            Self::Unauthorized
        } else {
            Self::Status { status, detail }
        }
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_))
    }
}

/// Maps the status of `GET /me` onto a verification verdict. Only an explicit
/// refusal counts as rejection.
pub fn verification_for_status(status: u16) -> Option<Verification> {
    match status {
        401 | 403 => Some(Verification::Rejected),
        200..=299 => None,
        _ => Some(Verification::Unreachable),
    }
}

/// An image attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Everything `POST /ask` needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionSubmission {
    pub query: String,
    pub community: String,
    pub images: Vec<ImageUpload>,
}

/// HTTP client for the TechsNetwork backend.
///
/// Tokens are passed in per call by the caller, which obtains them from the
/// auth context; the client never touches storage itself.
#[derive(Clone, Debug)]
pub struct TechsNetClient {
    config: FrontendConfig,
    client: Client,
}

impl TechsNetClient {
    /// Create a new API client for the given configuration.
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    /// Asks the backend whether `token` is still honoured.
    pub async fn verify_session(&self, token: &str) -> Verification {
        let url = self.api_url("me");
        let response = match self.client.get(url).bearer_auth(token).send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("session verification failed to reach backend: {err}");
                return Verification::Unreachable;
            }
        };
        if let Some(verdict) = verification_for_status(response.status().as_u16()) {
            return verdict;
        }
        match response.json::<MeResponse>().await {
            Ok(MeResponse { user }) => Verification::Confirmed(user),
            Err(err) => {
                log::warn!("unreadable /me response: {err}");
                Verification::Unreachable
            }
        }
    }

    /// Fetches the profile for a raw token (no `Bearer` header).
    pub async fn profile_by_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.api_url("user/profile/token");
        let response = self
            .client
            .get(url)
            .query(&[("token", token)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Submits a question with its attachments.
    pub async fn ask(
        &self,
        token: Option<&str>,
        submission: QuestionSubmission,
    ) -> Result<AskResponse, ApiError> {
        let url = self.api_url("ask");
        let mut form = Form::new()
            .text("query", submission.query)
            .text("community", submission.community);
        for image in submission.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part("images", part);
        }
        let mut request = self.client.post(url).multipart(form);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    /// One page of the community directory. `page` is 1-based.
    pub async fn communities(
        &self,
        search: &str,
        page: u32,
        limit: u32,
    ) -> Result<CommunityPage, ApiError> {
        let url = self.api_url("communities");
        let response = self
            .client
            .get(url)
            .query(&[("search", search)])
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Asks for a new community to be created.
    pub async fn request_community(&self, name: &str) -> Result<RequestCommunityResponse, ApiError> {
        let url = self.api_url("request-community");
        let payload = RequestCommunityRequest {
            name: name.to_string(),
        };
        let response = self.client.post(url).json(&payload).send().await?;
        Self::decode(response).await
    }

    /// Previously asked questions of the signed-in user.
    pub async fn history(&self, token: &str) -> Result<HistoryResponse, ApiError> {
        let url = self.api_url("history");
        let response = self.client.get(url).bearer_auth(token).send().await?;
        Self::decode(response).await
    }

    /// Subscription record for `email`.
    pub async fn subscription(&self, email: &str) -> Result<SubscriptionRecord, ApiError> {
        let url = self.api_url("subscription");
        let response = self
            .client
            .get(url)
            .query(&[("email", email)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Starts a hosted checkout for `plan` and returns where to send the browser.
    pub async fn create_payment_intent(
        &self,
        token: &str,
        plan: Plan,
    ) -> Result<PaymentIntentResponse, ApiError> {
        let url = self.api_url("create-payment-intent");
        let payload = PaymentIntentRequest::from(plan);
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Where the browser goes to start the Google sign-in flow.
    pub fn google_login_url(&self) -> String {
        self.config.google_login_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_body_on_forbidden_is_quota_exceeded() {
        let error = ApiError::from_status(403, r#"{"detail":"Query limit reached"}"#);
        assert!(error.is_quota_exceeded());
        assert_eq!(error.to_string(), "Query limit reached");
    }

    #[test]
    fn plain_forbidden_is_a_status_error() {
        let error = ApiError::from_status(403, r#"{"detail":"Forbidden"}"#);
        assert!(matches!(
            error,
            ApiError::Status { status: 403, ref detail } if detail == "Forbidden"
        ));
    }

    #[test]
    fn unauthorized_is_distinguished() {
        assert!(matches!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized
        ));
    }

    #[test]
    fn server_error_keeps_detail() {
        let error = ApiError::from_status(500, "upstream timeout");
        assert_eq!(error.to_string(), "Backend error 500: upstream timeout");
    }

    #[test]
    fn verification_statuses() {
        assert_eq!(verification_for_status(200), None);
        assert_eq!(verification_for_status(401), Some(Verification::Rejected));
        assert_eq!(verification_for_status(403), Some(Verification::Rejected));
        assert_eq!(verification_for_status(500), Some(Verification::Unreachable));
        assert_eq!(verification_for_status(404), Some(Verification::Unreachable));
    }

    #[test]
    fn client_builds_urls_from_config() {
        let client = TechsNetClient::new(FrontendConfig {
            api_base_url: "http://api.test".to_string(),
            log_level: log::Level::Info,
        });
        assert_eq!(client.api_url("/history"), "http://api.test/history");
        assert_eq!(client.google_login_url(), "http://api.test/login/google");
    }
}
