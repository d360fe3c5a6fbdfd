use crate::adapters::openpgp::sequoia_reader::SequoiaKeyReader;
use crate::cli::commands::{read_key_text, render, runtime};
use crate::cli::context;
use crate::core::errors::Result;
use crate::core::services::profile_service::ProfileService;

/// Execute the `keyprofile inspect` command.
///
/// Reads one armored key from `file` (or stdin) and prints its profile.
pub fn execute(file: Option<&str>, json: bool) -> Result<()> {
    let armored = read_key_text(file)?;
    let service = ProfileService {
        reader: SequoiaKeyReader,
    };

    let profile = runtime()?.block_on(service.extract(&armored))?;

    if json {
        return render::print_json(&profile);
    }
    render::print_profile(&profile, &context::settings().display.date_format);
    Ok(())
}
