pub mod claims;
pub mod inspect;
pub mod paste;
pub mod render;

use std::io::Read;
use std::path::PathBuf;

use crate::core::errors::{KeyProfileError, Result};

/// Read armored key text from `file`, or stdin when it is `None` or `"-"`.
pub fn read_key_text(file: Option<&str>) -> Result<String> {
    let text = match file {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(KeyProfileError::InputNotFound { path });
            }
            std::fs::read_to_string(&path)?
        }
    };

    if text.trim().is_empty() {
        return Err(KeyProfileError::EmptyInput);
    }
    Ok(text)
}

/// Single-threaded runtime for one command invocation.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt)
}
