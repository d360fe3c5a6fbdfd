use crate::core::errors::{KeyProfileError, Result};
use crate::core::models::key_profile::KeyProfile;
use crate::core::services::profile_assembler::ProfileAssembler;
use crate::core::traits::key_reader::KeyReader;

/// Runs the whole extraction pipeline through a `KeyReader` backend.
pub struct ProfileService<R: KeyReader> {
    pub reader: R,
}

impl<R: KeyReader> ProfileService<R> {
    /// Parse armored text and assemble its profile.
    ///
    /// Every failure comes back as `KeyProfileError::InvalidKey`; the
    /// underlying cause is only logged.
    pub async fn extract(&self, armored: &str) -> Result<KeyProfile> {
        let key = self.reader.read(armored).map_err(as_invalid_key)?;
        let profile = ProfileAssembler
            .assemble(&key)
            .await
            .map_err(as_invalid_key)?;

        tracing::debug!(
            fingerprint = %profile.fingerprint,
            user_ids = profile.user_ids.len(),
            sub_keys = profile.technical_details.sub_keys.len(),
            "key profile assembled"
        );
        Ok(profile)
    }
}

fn as_invalid_key(err: KeyProfileError) -> KeyProfileError {
    let reason = match err {
        KeyProfileError::InvalidKey { reason } => reason,
        other => other.to_string(),
    };
    tracing::debug!(%reason, "key rejected");
    KeyProfileError::InvalidKey { reason }
}
