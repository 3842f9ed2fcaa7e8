pub mod community_card;
pub mod loading;
pub mod subscription_plans;
pub mod upgrade_prompt;
pub mod user_dropdown;
pub mod workaround_card;
