/// Capabilities shown for a sub-key, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    SignData,
    EncryptCommunications,
    EncryptStorage,
}

impl Capability {
    /// All shown capabilities, in the order labels are listed.
    pub const ALL: [Capability; 3] = [
        Capability::SignData,
        Capability::EncryptCommunications,
        Capability::EncryptStorage,
    ];

    /// Bit in the first key-flags octet (RFC 4880 §5.2.3.21).
    pub const fn bit(self) -> u8 {
        match self {
            Capability::SignData => 0x02,
            Capability::EncryptCommunications => 0x04,
            Capability::EncryptStorage => 0x08,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Capability::SignData => "Signing",
            Capability::EncryptCommunications => "Encryption (Communications)",
            Capability::EncryptStorage => "Encryption (Storage)",
        }
    }
}

/// Label used when no shown capability is present.
pub const UNKNOWN_USAGE: &str = "Unknown";

/// The capabilities set in a key-flags octet. Absent flags mean none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyUsage {
    capabilities: Vec<Capability>,
}

impl KeyUsage {
    pub fn from_flags(flags: Option<u8>) -> Self {
        let bits = flags.unwrap_or(0);
        let capabilities = Capability::ALL
            .into_iter()
            .filter(|cap| bits & cap.bit() != 0)
            .collect();
        Self { capabilities }
    }
}

impl std::fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.capabilities.is_empty() {
            return f.write_str(UNKNOWN_USAGE);
        }
        let labels: Vec<&str> = self.capabilities.iter().map(|c| c.label()).collect();
        f.write_str(&labels.join(", "))
    }
}
