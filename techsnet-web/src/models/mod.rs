pub mod community_state;
pub mod query_state;
pub mod shell_state;
pub mod wallet;
