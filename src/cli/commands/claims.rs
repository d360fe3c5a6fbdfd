use crate::adapters::openpgp::sequoia_reader::SequoiaKeyReader;
use crate::cli::commands::{read_key_text, render, runtime};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::profile_service::ProfileService;

/// Execute the `keyprofile claims` command.
///
/// Prints only the identity-proof notations of the key.
pub fn execute(file: Option<&str>, json: bool) -> Result<()> {
    let armored = read_key_text(file)?;
    let service = ProfileService {
        reader: SequoiaKeyReader,
    };

    let profile = runtime()?.block_on(service.extract(&armored))?;

    if json {
        return render::print_json(&profile.notations);
    }

    if profile.notations.is_empty() {
        output::notice("No identity claims found on this key");
        return Ok(());
    }

    output::section(&format!("Identity Claims ({})", profile.notations.len()));
    render::print_claim_lines(&profile.notations);
    Ok(())
}
