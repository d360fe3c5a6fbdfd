use std::fmt::Write;

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::key_profile::KeyProfile;
use crate::core::models::notation_claim::NotationClaim;

/// Print a profile as human-readable text.
pub fn print_profile(profile: &KeyProfile, date_format: &str) {
    let (name, email) = match profile.primary_identity() {
        Some(primary) => (
            non_empty_or(&primary.name, "Unknown"),
            non_empty_or(&primary.email, "No email"),
        ),
        None => ("Unknown", "No email"),
    };

    output::section(&format!("🔑 {name}"));
    println!("  {}", email.dimmed());
    println!();
    output::field("Fingerprint", &profile.fingerprint);

    if profile.user_ids.len() > 1 {
        output::section("Other User IDs");
        for uid in &profile.user_ids[1..] {
            output::item(&uid.to_string());
        }
    }

    if !profile.notations.is_empty() {
        output::section("Identity Claims");
        print_claim_lines(&profile.notations);
    }

    let details = &profile.technical_details;
    output::section("Technical Details");
    output::field("Key Type", &details.key_type);
    if let Some(curve) = &details.curve {
        output::field("Curve", curve);
    }
    output::field("Key ID", &details.key_id);
    output::field(
        "Created",
        &details
            .creation_date
            .map(|date| format_date(date, date_format))
            .unwrap_or_else(|| "Unknown".into()),
    );

    let expiry = match details.expiry_date {
        None => "Never".to_string(),
        Some(date) if details.is_expired_at(Utc::now()) => {
            format!("{} {}", format_date(date, date_format), "(expired)".red())
        }
        Some(date) => format_date(date, date_format),
    };
    output::field("Expires", &expiry);

    let revoked = if details.is_revoked {
        "Yes".red().to_string()
    } else {
        "No".to_string()
    };
    output::field("Revoked", &revoked);

    if !details.sub_keys.is_empty() {
        output::section(&format!("Sub-keys ({})", details.sub_keys.len()));
        for sub_key in &details.sub_keys {
            let algorithm = match &sub_key.curve {
                Some(curve) => format!("{} [{curve}]", sub_key.algorithm),
                None => sub_key.algorithm.clone(),
            };
            output::item(&format!(
                "{algorithm} (ID: {}, Usage: {})",
                sub_key.key_id, sub_key.usage
            ));
        }
    }
    println!();
}

/// Print identity claims as `name value` lines.
pub fn print_claim_lines(claims: &[NotationClaim]) {
    for claim in claims {
        output::item(&format!("{} {}", claim.name.dimmed(), claim.value));
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

/// Format with the configured strftime pattern, falling back to RFC 3339.
fn format_date(date: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_rfc3339();
    }
    out
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
