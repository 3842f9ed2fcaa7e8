mod auth_success;
mod community;
mod history;
mod home;
mod login;
mod query;
mod subscription;
mod wallet;

pub use auth_success::AuthSuccessPage;
pub use community::CommunityPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use query::QueryPage;
pub use subscription::SubscriptionPage;
pub use wallet::WalletPage;
