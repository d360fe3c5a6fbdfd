use std::future::Future;

use chrono::{DateTime, Utc};

use crate::core::errors::Result;
use crate::core::models::algorithm::AlgorithmDescriptor;

/// One binding signature of a sub-key, reduced to what the profile reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingSignature {
    /// Notation name/value pairs, in the order the signature carries them.
    pub notations: Vec<(String, String)>,
    /// First key-flags octet, if the signature has a key-flags subpacket.
    pub key_flags: Option<u8>,
}

/// A sub-key as exposed by the key object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubKey {
    pub key_id: Vec<u8>,
    pub algorithm: AlgorithmDescriptor,
    /// Binding signatures in the order the key object presents them.
    pub binding_signatures: Vec<BindingSignature>,
}

impl SubKey {
    /// The binding signature the profile treats as authoritative.
    pub fn first_binding(&self) -> Option<&BindingSignature> {
        self.binding_signatures.first()
    }
}

/// Port for a parsed OpenPGP key.
///
/// Implementations live in `adapters::openpgp`. Everything here is
/// synchronous except the revocation check, which may verify signatures.
pub trait KeySource: Send + Sync {
    /// Raw user-ID strings, primary first.
    fn user_ids(&self) -> Vec<String>;

    fn sub_keys(&self) -> Vec<SubKey>;

    fn algorithm(&self) -> AlgorithmDescriptor;

    fn fingerprint(&self) -> Vec<u8>;

    fn key_id(&self) -> Vec<u8>;

    fn creation_time(&self) -> Option<DateTime<Utc>>;

    /// `None` means the key does not expire.
    fn expiration_time(&self) -> Option<DateTime<Utc>>;

    fn is_revoked(&self) -> impl Future<Output = Result<bool>> + Send;
}
