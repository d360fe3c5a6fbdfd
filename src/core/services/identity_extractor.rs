use crate::core::models::user_identity::UserIdentity;

/// Splits raw user-ID strings into name and email.
///
/// Grammar, applied to the string with surrounding whitespace removed:
/// - **Bracketed**: `NAME <EMAIL>` where `<EMAIL>` is the last bracket group
///   and ends the string, and EMAIL contains no `<` or `>`. NAME is the text
///   before it with trailing whitespace removed, and may be empty.
/// - **Plain**: anything else. The whole raw string becomes the name and
///   the email is empty.
///
/// Every input matches one branch, so extraction cannot fail.
pub struct IdentityExtractor;

impl IdentityExtractor {
    pub fn extract(raw: &str) -> UserIdentity {
        match split_bracketed(raw.trim()) {
            Some((name, email)) => UserIdentity {
                name: name.to_string(),
                email: email.to_string(),
                raw: raw.to_string(),
            },
            None => UserIdentity {
                name: raw.to_string(),
                email: String::new(),
                raw: raw.to_string(),
            },
        }
    }

    /// Extract every user ID, keeping order.
    pub fn extract_all(raw_ids: &[String]) -> Vec<UserIdentity> {
        raw_ids.iter().map(|raw| Self::extract(raw)).collect()
    }
}

/// Returns `(name, email)` for the bracketed form, `None` otherwise.
fn split_bracketed(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_suffix('>')?;
    let open = inner.rfind('<')?;
    let email = &inner[open + 1..];
    if email.contains('>') {
        return None;
    }
    Some((inner[..open].trim_end(), email))
}
