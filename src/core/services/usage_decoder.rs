use crate::core::models::key_usage::KeyUsage;
use crate::core::traits::key_source::SubKey;

/// Turns key-flag octets into capability labels.
pub struct UsageDecoder;

impl UsageDecoder {
    /// Labels for a key-flags octet, or `"Unknown"` when none apply.
    pub fn decode(flags: Option<u8>) -> String {
        KeyUsage::from_flags(flags).to_string()
    }

    /// Labels for a sub-key, read from its first binding signature.
    pub fn decode_sub_key(sub_key: &SubKey) -> String {
        Self::decode(sub_key.first_binding().and_then(|sig| sig.key_flags))
    }
}
