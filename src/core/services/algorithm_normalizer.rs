use crate::core::models::algorithm::AlgorithmDescriptor;

/// Display form of one key's algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmSummary {
    /// e.g. `"RSA (4096 bits)"` or `"EdDSA (Legacy)"`.
    pub algorithm: String,
    /// Only set for curve-based families.
    pub curve: Option<String>,
}

/// Render a descriptor for display.
pub fn summarize(descriptor: &AlgorithmDescriptor) -> AlgorithmSummary {
    tracing::debug!(?descriptor, "normalizing algorithm descriptor");

    let name = descriptor.family().display_name();
    let algorithm = match descriptor.bits() {
        Some(bits) if bits > 0 => format!("{name} ({bits} bits)"),
        _ => name.to_string(),
    };
    let curve = descriptor
        .curve()
        .map(|curve| curve.display_name().to_string());

    AlgorithmSummary { algorithm, curve }
}
