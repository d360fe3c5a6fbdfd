use std::path::PathBuf;

/// All domain errors for keyprofile.
///
/// `InvalidKey` deliberately hides its cause from the user: a key either
/// yields a complete profile or this one message. The cause is kept for
/// the diagnostic log.
#[derive(Debug, thiserror::Error)]
pub enum KeyProfileError {
    #[error(
        "The supplied text is not a valid OpenPGP public key\n\n  \
         Paste the whole armored block, including the\n  \
         -----BEGIN PGP PUBLIC KEY BLOCK----- and -----END PGP PUBLIC KEY BLOCK----- lines.\n  \
         Run with --verbose to see why the key was rejected."
    )]
    InvalidKey { reason: String },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct, or pipe the key on stdin:\n    \
         → keyprofile inspect < key.asc"
    )]
    InputNotFound { path: PathBuf },

    #[error(
        "No key text supplied\n\n  \
         Pass a file (keyprofile inspect key.asc) or pipe the key on stdin."
    )]
    EmptyInput,

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KeyProfileError {
    /// Wrap any intake or assembly failure as the generic invalid-key error.
    pub fn invalid_key(reason: impl std::fmt::Display) -> Self {
        Self::InvalidKey {
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeyProfileError>;
