/// Public-key algorithm families known to the display tables.
///
/// Parsed case-insensitively from the raw identifier a key object reports.
/// Anything unrecognised is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmFamily {
    RsaEncryptSign,
    RsaEncrypt,
    RsaSign,
    EdDsa,
    EdDsaLegacy,
    Ecdh,
    Ecdsa,
    ElGamal,
    Dsa,
    Other(String),
}

/// Raw identifier (lowercase) → family.
const ALGORITHM_TABLE: &[(&str, AlgorithmFamily)] = &[
    ("rsaencryptsign", AlgorithmFamily::RsaEncryptSign),
    ("rsaencrypt", AlgorithmFamily::RsaEncrypt),
    ("rsasign", AlgorithmFamily::RsaSign),
    ("eddsa", AlgorithmFamily::EdDsa),
    ("eddsalegacy", AlgorithmFamily::EdDsaLegacy),
    ("ecdh", AlgorithmFamily::Ecdh),
    ("ecdsa", AlgorithmFamily::Ecdsa),
    ("elgamal", AlgorithmFamily::ElGamal),
    ("dsa", AlgorithmFamily::Dsa),
];

impl AlgorithmFamily {
    /// Classify a raw algorithm identifier.
    pub fn from_raw(raw: &str) -> Self {
        let key = raw.to_lowercase();
        ALGORITHM_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, family)| family.clone())
            .unwrap_or_else(|| AlgorithmFamily::Other(raw.to_string()))
    }

    /// Canonical display name. `Other` returns the raw identifier unchanged.
    pub fn display_name(&self) -> &str {
        match self {
            AlgorithmFamily::RsaEncryptSign
            | AlgorithmFamily::RsaEncrypt
            | AlgorithmFamily::RsaSign => "RSA",
            AlgorithmFamily::EdDsa => "EdDSA",
            AlgorithmFamily::EdDsaLegacy => "EdDSA (Legacy)",
            AlgorithmFamily::Ecdh => "ECDH",
            AlgorithmFamily::Ecdsa => "ECDSA",
            AlgorithmFamily::ElGamal => "ElGamal",
            AlgorithmFamily::Dsa => "DSA",
            AlgorithmFamily::Other(raw) => raw,
        }
    }

    /// Families whose keys live on an elliptic curve.
    pub fn is_elliptic_curve(&self) -> bool {
        matches!(
            self,
            AlgorithmFamily::EdDsa
                | AlgorithmFamily::EdDsaLegacy
                | AlgorithmFamily::Ecdh
                | AlgorithmFamily::Ecdsa
        )
    }
}

/// Named curves known to the display tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveName {
    Ed25519Legacy,
    Curve25519Legacy,
    Curve25519,
    P256,
    P384,
    P521,
    Secp256k1,
    Other(String),
}

const CURVE_TABLE: &[(&str, CurveName)] = &[
    ("ed25519legacy", CurveName::Ed25519Legacy),
    ("curve25519legacy", CurveName::Curve25519Legacy),
    ("curve25519", CurveName::Curve25519),
    ("p256", CurveName::P256),
    ("p384", CurveName::P384),
    ("p521", CurveName::P521),
    ("secp256k1", CurveName::Secp256k1),
];

impl CurveName {
    /// Classify a raw curve identifier. Empty input means "no curve".
    pub fn from_raw(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let key = raw.to_lowercase();
        let curve = CURVE_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, curve)| curve.clone())
            .unwrap_or_else(|| CurveName::Other(raw.to_string()));
        Some(curve)
    }

    pub fn display_name(&self) -> &str {
        match self {
            CurveName::Ed25519Legacy => "Ed25519 (Legacy)",
            CurveName::Curve25519Legacy => "Curve25519 (Legacy)",
            CurveName::Curve25519 => "X25519",
            CurveName::P256 => "P-256",
            CurveName::P384 => "P-384",
            CurveName::P521 => "P-521",
            CurveName::Secp256k1 => "secp256k1",
            CurveName::Other(raw) => raw,
        }
    }
}

/// Algorithm parameters of one (sub-)key, shaped by family.
///
/// Curve-based families carry a curve; the others never do, even when the
/// raw descriptor had a stray curve field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmDescriptor {
    FiniteField {
        family: AlgorithmFamily,
        bits: Option<u32>,
    },
    EllipticCurve {
        family: AlgorithmFamily,
        curve: Option<CurveName>,
        bits: Option<u32>,
    },
}

impl AlgorithmDescriptor {
    /// Build a descriptor from the loosely-typed fields a key object reports.
    pub fn from_raw(name: &str, bits: Option<u32>, curve: Option<&str>) -> Self {
        let family = AlgorithmFamily::from_raw(name);
        if family.is_elliptic_curve() {
            AlgorithmDescriptor::EllipticCurve {
                family,
                curve: curve.and_then(CurveName::from_raw),
                bits,
            }
        } else {
            AlgorithmDescriptor::FiniteField { family, bits }
        }
    }

    pub fn family(&self) -> &AlgorithmFamily {
        match self {
            AlgorithmDescriptor::FiniteField { family, .. }
            | AlgorithmDescriptor::EllipticCurve { family, .. } => family,
        }
    }

    pub fn bits(&self) -> Option<u32> {
        match self {
            AlgorithmDescriptor::FiniteField { bits, .. }
            | AlgorithmDescriptor::EllipticCurve { bits, .. } => *bits,
        }
    }

    pub fn curve(&self) -> Option<&CurveName> {
        match self {
            AlgorithmDescriptor::EllipticCurve { curve, .. } => curve.as_ref(),
            AlgorithmDescriptor::FiniteField { .. } => None,
        }
    }
}
