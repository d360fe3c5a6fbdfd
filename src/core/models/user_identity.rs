use serde::Serialize;

/// One user ID of a key, split for display.
///
/// `raw` is kept verbatim. `name` and `email` are best-effort and may be
/// empty, never missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
    pub raw: String,
}

impl std::fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name.is_empty(), self.email.is_empty()) {
            (_, true) => write!(f, "{}", self.name),
            (true, false) => write!(f, "<{}>", self.email),
            (false, false) => write!(f, "{} <{}>", self.name, self.email),
        }
    }
}
