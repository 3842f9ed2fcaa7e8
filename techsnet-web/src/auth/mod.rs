//! Session state shared with every view, and the route guards built on it.

pub mod context;
pub mod guards;

pub use context::{AuthContext, AuthProvider, use_auth};
pub use guards::{RequireAuth, RequireGuest};
