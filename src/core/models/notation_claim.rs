use serde::Serialize;

/// Reserved notation namespace for external identity proofs.
///
/// Matched as a prefix, so `proof@ariadne.id/twitter` and similar
/// suffixed names count as well.
pub const PROOF_NAMESPACE: &str = "proof@ariadne.id";

/// An identity-proof notation taken from a sub-key binding signature.
///
/// The value is opaque (usually a URL) and is never fetched or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotationClaim {
    pub name: String,
    pub value: String,
}

impl NotationClaim {
    /// Returns true if `name` lies in the identity-proof namespace.
    pub fn is_proof_name(name: &str) -> bool {
        name.starts_with(PROOF_NAMESPACE)
    }
}
