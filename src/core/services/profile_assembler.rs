use crate::core::errors::Result;
use crate::core::models::key_profile::{KeyProfile, SubKeyDetail, TechnicalDetails};
use crate::core::services::algorithm_normalizer;
use crate::core::services::identity_extractor::IdentityExtractor;
use crate::core::services::notation_collector::NotationCollector;
use crate::core::services::usage_decoder::UsageDecoder;
use crate::core::traits::key_source::{KeySource, SubKey};

/// Builds a `KeyProfile` from a parsed key.
///
/// Either every field is filled or an error is returned; there is no
/// partially assembled profile.
pub struct ProfileAssembler;

impl ProfileAssembler {
    pub async fn assemble<K: KeySource>(&self, key: &K) -> Result<KeyProfile> {
        let user_ids = IdentityExtractor::extract_all(&key.user_ids());

        let sub_keys = key.sub_keys();
        let notations = NotationCollector::collect(&sub_keys);
        let sub_key_details = sub_keys.iter().map(describe_sub_key).collect();

        let primary = algorithm_normalizer::summarize(&key.algorithm());
        let is_revoked = key.is_revoked().await?;

        let technical_details = TechnicalDetails {
            key_type: primary.algorithm,
            curve: primary.curve,
            key_id: hex::encode_upper(key.key_id()),
            creation_date: key.creation_time(),
            expiry_date: key.expiration_time(),
            sub_keys: sub_key_details,
            is_revoked,
        };

        Ok(KeyProfile {
            user_ids,
            fingerprint: hex::encode_upper(key.fingerprint()),
            notations,
            technical_details,
        })
    }
}

fn describe_sub_key(sub_key: &SubKey) -> SubKeyDetail {
    let summary = algorithm_normalizer::summarize(&sub_key.algorithm);
    SubKeyDetail {
        key_id: hex::encode_upper(&sub_key.key_id),
        algorithm: summary.algorithm,
        curve: summary.curve,
        usage: UsageDecoder::decode_sub_key(sub_key),
    }
}
