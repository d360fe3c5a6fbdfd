//! In-memory key objects for service tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::core::errors::{KeyProfileError, Result};
use crate::core::models::algorithm::AlgorithmDescriptor;
use crate::core::traits::key_reader::KeyReader;
use crate::core::traits::key_source::{BindingSignature, KeySource, SubKey};

#[derive(Debug, Clone)]
pub struct FakeKey {
    pub user_ids: Vec<String>,
    pub sub_keys: Vec<SubKey>,
    pub algorithm: AlgorithmDescriptor,
    pub fingerprint: Vec<u8>,
    pub created: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
    /// `Err` simulates a failing revocation check.
    pub revoked: std::result::Result<bool, String>,
}

impl FakeKey {
    /// One user ID, RSA-2048 primary, no sub-keys.
    pub fn alice() -> Self {
        Self {
            user_ids: vec!["Alice <alice@example.com>".into()],
            sub_keys: vec![],
            algorithm: AlgorithmDescriptor::from_raw("rsaEncryptSign", Some(2048), None),
            fingerprint: vec![
                0xFE, 0x99, 0xFA, 0x61, 0xB6, 0xE7, 0x3B, 0xD7, 0x47, 0xC4, 0x18, 0xB6, 0x2F,
                0x0C, 0xCA, 0xE7, 0x89, 0x2B, 0x31, 0xEA,
            ],
            created: Some(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()),
            expires: None,
            revoked: Ok(false),
        }
    }

    pub fn with_sub_key(mut self, sub_key: SubKey) -> Self {
        self.sub_keys.push(sub_key);
        self
    }
}

pub fn sub_key(
    key_id: u8,
    algorithm: AlgorithmDescriptor,
    key_flags: Option<u8>,
    notations: &[(&str, &str)],
) -> SubKey {
    SubKey {
        key_id: vec![key_id; 8],
        algorithm,
        binding_signatures: vec![BindingSignature {
            notations: notations
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            key_flags,
        }],
    }
}

impl KeySource for FakeKey {
    fn user_ids(&self) -> Vec<String> {
        self.user_ids.clone()
    }

    fn sub_keys(&self) -> Vec<SubKey> {
        self.sub_keys.clone()
    }

    fn algorithm(&self) -> AlgorithmDescriptor {
        self.algorithm.clone()
    }

    fn fingerprint(&self) -> Vec<u8> {
        self.fingerprint.clone()
    }

    fn key_id(&self) -> Vec<u8> {
        let start = self.fingerprint.len().saturating_sub(8);
        self.fingerprint[start..].to_vec()
    }

    fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    fn expiration_time(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    async fn is_revoked(&self) -> Result<bool> {
        tokio::task::yield_now().await;
        self.revoked.clone().map_err(KeyProfileError::invalid_key)
    }
}

/// Reader that maps a few fixed strings to fake keys.
pub struct FakeReader;

impl KeyReader for FakeReader {
    type Key = FakeKey;

    fn read(&self, armored: &str) -> Result<FakeKey> {
        match armored.trim() {
            "alice" => Ok(FakeKey::alice()),
            "bob" => {
                let mut key = FakeKey::alice();
                key.user_ids = vec!["Bob <bob@example.com>".into()];
                key.fingerprint = vec![0x04; 20];
                Ok(key)
            }
            "broken-revocation" => {
                let mut key = FakeKey::alice();
                key.revoked = Err("signature check failed".into());
                Ok(key)
            }
            other => Err(KeyProfileError::invalid_key(format!("unknown fixture {other:?}"))),
        }
    }
}
