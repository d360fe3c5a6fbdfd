use sequoia_openpgp as openpgp;

use openpgp::Cert;
use openpgp::parse::Parse;

use crate::adapters::openpgp::sequoia_key::SequoiaKey;
use crate::adapters::openpgp::storage_order::StorageOrder;
use crate::core::errors::{KeyProfileError, Result};
use crate::core::traits::key_reader::KeyReader;

/// Key intake backed by sequoia-openpgp.
///
/// Accepts ASCII-armored or binary input.
/// Secret key material is stripped before anything else looks at the key.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequoiaKeyReader;

impl KeyReader for SequoiaKeyReader {
    type Key = SequoiaKey;

    fn read(&self, armored: &str) -> Result<SequoiaKey> {
        let cert = Cert::from_bytes(armored.as_bytes()).map_err(KeyProfileError::invalid_key)?;

        let cert = if cert.is_tsk() {
            tracing::warn!(
                fingerprint = %cert.fingerprint(),
                "input contains secret key material; only the public part is used. Share public keys only."
            );
            cert.strip_secret_key_material()
        } else {
            cert
        };

        Ok(SequoiaKey::new(cert, StorageOrder::scan(armored.as_bytes())))
    }
}
