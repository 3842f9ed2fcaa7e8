pub mod ask;
pub mod billing;
pub mod community;
pub mod errors;
pub mod history;
pub mod user;

pub use ask::{AskResponse, QUOTA_EXCEEDED_MARKER, is_quota_exceeded};
pub use billing::{PaymentIntentRequest, PaymentIntentResponse, Plan, SubscriptionRecord};
pub use community::{Community, CommunityPage, RequestCommunityRequest, RequestCommunityResponse};
pub use errors::ErrorResponse;
pub use history::{HistoryEntry, HistoryResponse};
pub use user::{MeResponse, SubscriptionUsage, UserProfile};
