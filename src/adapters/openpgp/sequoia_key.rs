use std::future::Future;

use chrono::{DateTime, Utc};
use sequoia_openpgp as openpgp;

use openpgp::Cert;
use openpgp::cert::prelude::*;
use openpgp::crypto::mpi;
use openpgp::packet::{Signature, UserID};
use openpgp::policy::StandardPolicy;
use openpgp::types::{Curve, KeyFlags, PublicKeyAlgorithm, RevocationStatus};

use crate::adapters::openpgp::storage_order::StorageOrder;
use crate::core::errors::{KeyProfileError, Result};
use crate::core::models::algorithm::AlgorithmDescriptor;
use crate::core::traits::key_source::{BindingSignature, KeySource, SubKey};

/// A parsed certificate exposed through the `KeySource` port.
///
/// Algorithm and curve names are reported with the identifiers the
/// normalizer tables use (`rsaEncryptSign`, `eddsaLegacy`, `p256`, ...).
/// User IDs and sub-keys are reported in input order; self-signatures come
/// in sequoia's order, newest first.
#[derive(Debug, Clone)]
pub struct SequoiaKey {
    cert: Cert,
    order: StorageOrder,
}

impl SequoiaKey {
    pub fn new(cert: Cert, order: StorageOrder) -> Self {
        Self { cert, order }
    }

    #[cfg(test)]
    pub fn cert(&self) -> &Cert {
        &self.cert
    }

    /// The primary user ID, only if a self-signature explicitly flags it.
    fn flagged_primary_user_id(&self) -> Option<String> {
        let policy = StandardPolicy::new();
        let valid = self.cert.with_policy(&policy, None).ok()?;
        let primary = valid.primary_userid().ok()?;
        primary
            .binding_signature()
            .primary_userid()
            .unwrap_or(false)
            .then(|| user_id_text(primary.userid()))
    }
}

impl KeySource for SequoiaKey {
    fn user_ids(&self) -> Vec<String> {
        let mut stored: Vec<&UserID> = self.cert.userids().map(|ua| ua.userid()).collect();
        stored.sort_by_key(|uid| self.order.user_id_rank(uid.value()));
        let mut ids: Vec<String> = stored.into_iter().map(user_id_text).collect();

        if let Some(primary) = self.flagged_primary_user_id()
            && let Some(pos) = ids.iter().position(|id| *id == primary)
        {
            let primary = ids.remove(pos);
            ids.insert(0, primary);
        }
        ids
    }

    fn sub_keys(&self) -> Vec<SubKey> {
        let mut stored: Vec<_> = self.cert.keys().subkeys().collect();
        stored.sort_by_key(|ka| self.order.sub_key_rank(&ka.key().fingerprint()));

        stored
            .into_iter()
            .map(|ka| SubKey {
                key_id: ka.key().keyid().as_bytes().to_vec(),
                algorithm: descriptor(ka.key().pk_algo(), ka.key().mpis()),
                binding_signatures: ka.self_signatures().map(binding_signature).collect(),
            })
            .collect()
    }

    fn algorithm(&self) -> AlgorithmDescriptor {
        let key = self.cert.primary_key().key();
        descriptor(key.pk_algo(), key.mpis())
    }

    fn fingerprint(&self) -> Vec<u8> {
        self.cert.fingerprint().as_bytes().to_vec()
    }

    fn key_id(&self) -> Vec<u8> {
        self.cert.keyid().as_bytes().to_vec()
    }

    fn creation_time(&self) -> Option<DateTime<Utc>> {
        Some(self.cert.primary_key().key().creation_time().into())
    }

    fn expiration_time(&self) -> Option<DateTime<Utc>> {
        let policy = StandardPolicy::new();
        match self.cert.with_policy(&policy, None) {
            Ok(valid) => valid
                .primary_key()
                .key_expiration_time()
                .map(DateTime::<Utc>::from),
            Err(err) => {
                tracing::debug!(%err, "no policy-valid self-signature; reporting no expiry");
                None
            }
        }
    }

    fn is_revoked(&self) -> impl Future<Output = Result<bool>> + Send {
        let cert = self.cert.clone();
        async move {
            // Verifying revocation signatures is CPU-bound.
            tokio::task::spawn_blocking(move || {
                let policy = StandardPolicy::new();
                matches!(
                    cert.revocation_status(&policy, None),
                    RevocationStatus::Revoked(_)
                )
            })
            .await
            .map_err(KeyProfileError::invalid_key)
        }
    }
}

fn user_id_text(userid: &UserID) -> String {
    String::from_utf8_lossy(userid.value()).into_owned()
}

fn binding_signature(sig: &Signature) -> BindingSignature {
    BindingSignature {
        notations: sig
            .notation_data()
            .map(|n| {
                (
                    n.name().to_string(),
                    String::from_utf8_lossy(n.value()).into_owned(),
                )
            })
            .collect(),
        key_flags: sig.key_flags().map(|flags| key_flag_octet(&flags)),
    }
}

/// First key-flags octet as defined in RFC 4880 §5.2.3.21.
fn key_flag_octet(flags: &KeyFlags) -> u8 {
    [
        (flags.for_certification(), 0x01),
        (flags.for_signing(), 0x02),
        (flags.for_transport_encryption(), 0x04),
        (flags.for_storage_encryption(), 0x08),
        (flags.is_split_key(), 0x10),
        (flags.for_authentication(), 0x20),
        (flags.is_group_key(), 0x80),
    ]
    .into_iter()
    .filter(|(set, _)| *set)
    .fold(0, |octet, (_, bit)| octet | bit)
}

fn descriptor(algo: PublicKeyAlgorithm, mpis: &mpi::PublicKey) -> AlgorithmDescriptor {
    let name = algorithm_name(algo);
    tracing::debug!(%algo, raw = %name, "primary or sub-key algorithm");

    match mpis {
        mpi::PublicKey::EdDSA { curve, .. }
        | mpi::PublicKey::ECDSA { curve, .. }
        | mpi::PublicKey::ECDH { curve, .. } => {
            AlgorithmDescriptor::from_raw(&name, None, Some(&curve_name(curve)))
        }
        _ => {
            let bits = mpis.bits().and_then(|b| u32::try_from(b).ok());
            AlgorithmDescriptor::from_raw(&name, bits, None)
        }
    }
}

#[allow(deprecated)]
fn algorithm_name(algo: PublicKeyAlgorithm) -> String {
    match algo {
        PublicKeyAlgorithm::RSAEncryptSign => "rsaEncryptSign".into(),
        PublicKeyAlgorithm::RSAEncrypt => "rsaEncrypt".into(),
        PublicKeyAlgorithm::RSASign => "rsaSign".into(),
        PublicKeyAlgorithm::ElGamalEncrypt | PublicKeyAlgorithm::ElGamalEncryptSign => {
            "elgamal".into()
        }
        PublicKeyAlgorithm::DSA => "dsa".into(),
        PublicKeyAlgorithm::ECDH => "ecdh".into(),
        PublicKeyAlgorithm::ECDSA => "ecdsa".into(),
        PublicKeyAlgorithm::EdDSA => "eddsaLegacy".into(),
        other => other.to_string(),
    }
}

fn curve_name(curve: &Curve) -> String {
    match curve {
        Curve::NistP256 => "p256".into(),
        Curve::NistP384 => "p384".into(),
        Curve::NistP521 => "p521".into(),
        Curve::BrainpoolP256 => "brainpoolP256r1".into(),
        Curve::BrainpoolP512 => "brainpoolP512r1".into(),
        Curve::Ed25519 => "ed25519Legacy".into(),
        Curve::Cv25519 => "curve25519Legacy".into(),
        other => other.to_string(),
    }
}
