use crate::core::models::notation_claim::NotationClaim;
use crate::core::traits::key_source::SubKey;

/// Collects identity-proof notations from sub-key binding signatures.
///
/// Only the first binding signature of each sub-key is read. Sub-keys
/// without one contribute nothing.
pub struct NotationCollector;

impl NotationCollector {
    /// Claims in sub-key order, then in signature order within a sub-key.
    pub fn collect(sub_keys: &[SubKey]) -> Vec<NotationClaim> {
        sub_keys
            .iter()
            .filter_map(SubKey::first_binding)
            .flat_map(|sig| sig.notations.iter())
            .filter(|(name, _)| {
                let keep = NotationClaim::is_proof_name(name);
                if !keep {
                    tracing::trace!(notation = %name, "skipping notation outside proof namespace");
                }
                keep
            })
            .map(|(name, value)| NotationClaim {
                name: name.clone(),
                value: value.clone(),
            })
            .collect()
    }
}
