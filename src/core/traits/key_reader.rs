use crate::core::errors::Result;
use crate::core::traits::key_source::KeySource;

/// Port for turning armored key text into a key object.
///
/// The core never parses OpenPGP itself; see `adapters::openpgp`.
pub trait KeyReader: Send + Sync {
    type Key: KeySource;

    /// Parse one public key. Any parse failure is an error.
    fn read(&self, armored: &str) -> Result<Self::Key>;
}
