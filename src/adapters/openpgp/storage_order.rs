use sequoia_openpgp as openpgp;

use openpgp::parse::Parse;
use openpgp::{Fingerprint, Packet, PacketPile};

/// Order in which user IDs and sub-keys appear in the input packets.
///
/// `Cert` canonicalizes its components into sorted order; this records the
/// key's own order so it can be restored.
#[derive(Debug, Clone, Default)]
pub struct StorageOrder {
    user_ids: Vec<Vec<u8>>,
    sub_keys: Vec<Fingerprint>,
}

impl StorageOrder {
    /// Scan raw (armored or binary) input. Unparseable input gives an empty order.
    pub fn scan(bytes: &[u8]) -> Self {
        match PacketPile::from_bytes(bytes) {
            Ok(pile) => Self::from_packets(pile.descendants()),
            Err(err) => {
                tracing::debug!(%err, "packet scan failed; keeping canonical component order");
                Self::default()
            }
        }
    }

    fn from_packets<'a>(packets: impl Iterator<Item = &'a Packet>) -> Self {
        let mut order = Self::default();
        for packet in packets {
            match packet {
                Packet::UserID(uid) => order.user_ids.push(uid.value().to_vec()),
                Packet::PublicSubkey(key) => order.sub_keys.push(key.fingerprint()),
                Packet::SecretSubkey(key) => order.sub_keys.push(key.fingerprint()),
                _ => {}
            }
        }
        order
    }

    /// Position of a user ID in the input. Unseen IDs rank last.
    pub fn user_id_rank(&self, value: &[u8]) -> usize {
        self.user_ids
            .iter()
            .position(|seen| seen == value)
            .unwrap_or(usize::MAX)
    }

    /// Position of a sub-key in the input. Unseen keys rank last.
    pub fn sub_key_rank(&self, fingerprint: &Fingerprint) -> usize {
        self.sub_keys
            .iter()
            .position(|seen| seen == fingerprint)
            .unwrap_or(usize::MAX)
    }
}
