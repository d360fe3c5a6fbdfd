use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::notation_claim::NotationClaim;
use crate::core::models::user_identity::UserIdentity;

/// Everything shown to a user evaluating one public key.
///
/// Built in one piece by `ProfileAssembler`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyProfile {
    #[serde(rename = "userIDs")]
    pub user_ids: Vec<UserIdentity>,
    /// Uppercase hex.
    pub fingerprint: String,
    pub notations: Vec<NotationClaim>,
    #[serde(rename = "technicalDetails")]
    pub technical_details: TechnicalDetails,
}

impl KeyProfile {
    /// The identity shown as the key's headline (first user ID).
    pub fn primary_identity(&self) -> Option<&UserIdentity> {
        self.user_ids.first()
    }
}

/// Algorithm, validity and sub-key information for the primary key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub key_type: String,
    pub curve: Option<String>,
    #[serde(rename = "keyID")]
    pub key_id: String,
    pub creation_date: Option<DateTime<Utc>>,
    /// `None` means the key does not expire.
    pub expiry_date: Option<DateTime<Utc>>,
    pub sub_keys: Vec<SubKeyDetail>,
    pub is_revoked: bool,
}

impl TechnicalDetails {
    /// Returns true if the expiry date is in the past relative to `now`.
    ///
    /// Independent of revocation: a key may be revoked, expired, both or neither.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry <= now)
    }
}

/// One sub-key as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubKeyDetail {
    #[serde(rename = "keyID")]
    pub key_id: String,
    pub algorithm: String,
    /// Only set for curve-based algorithms.
    pub curve: Option<String>,
    /// Comma-joined capability labels, or `"Unknown"`.
    pub usage: String,
}
