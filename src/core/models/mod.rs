pub mod algorithm;
pub mod key_profile;
pub mod key_usage;
pub mod notation_claim;
pub mod user_identity;
