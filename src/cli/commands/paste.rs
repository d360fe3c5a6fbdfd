use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use crate::adapters::openpgp::sequoia_reader::SequoiaKeyReader;
use crate::cli::commands::{render, runtime};
use crate::cli::context;
use crate::core::errors::{KeyProfileError, Result};
use crate::core::services::profile_service::ProfileService;
use crate::core::services::profile_session::ProfileSession;
use crate::core::traits::key_reader::KeyReader;

/// Marks the end of one armored block in the pasted stream.
const END_MARKER: &str = "-----END PGP";

/// Execute the `keyprofile paste` command.
///
/// Every armored block read from stdin is a new submission and starts
/// extracting while the rest of the input is still being read. Only the
/// last submission may publish, so the profile printed at EOF always
/// belongs to the last block pasted.
pub fn execute(json: bool) -> Result<()> {
    runtime()?.block_on(run(json))
}

async fn run(json: bool) -> Result<()> {
    let service = Arc::new(ProfileService {
        reader: SequoiaKeyReader,
    });
    let session = Arc::new(ProfileSession::new());

    let submitted = submit_blocks(BufReader::new(tokio::io::stdin()), &service, &session).await?;
    if submitted == 0 {
        return Err(KeyProfileError::EmptyInput);
    }

    match session.current() {
        Some(profile) if json => render::print_json(&profile),
        Some(profile) => {
            render::print_profile(&profile, &context::settings().display.date_format);
            Ok(())
        }
        None => Err(KeyProfileError::invalid_key(
            session
                .last_error()
                .unwrap_or_else(|| "no submission completed".into()),
        )),
    }
}

/// Submit each armored block of `input` as soon as its end line arrives,
/// then wait for every extraction. Returns the number of submissions.
pub async fn submit_blocks<R, I>(
    input: I,
    service: &Arc<ProfileService<R>>,
    session: &Arc<ProfileSession>,
) -> Result<usize>
where
    R: KeyReader + 'static,
    I: AsyncBufRead + Unpin,
{
    let mut tasks = JoinSet::new();
    let mut lines = input.lines();
    let mut block = String::new();
    let mut submitted = 0usize;

    while let Some(line) = lines.next_line().await? {
        block.push_str(&line);
        block.push('\n');

        if line.trim_start().starts_with(END_MARKER) {
            submitted += 1;
            submit(&mut tasks, service, session, std::mem::take(&mut block), submitted);
        }
    }

    if !block.trim().is_empty() {
        submitted += 1;
        submit(&mut tasks, service, session, block, submitted);
    }

    while let Some(joined) = tasks.join_next().await {
        let published = joined.map_err(std::io::Error::other)?;
        tracing::trace!(published, "extraction finished");
    }
    Ok(submitted)
}

fn submit<R: KeyReader + 'static>(
    tasks: &mut JoinSet<bool>,
    service: &Arc<ProfileService<R>>,
    session: &Arc<ProfileSession>,
    armored: String,
    request: usize,
) {
    let ticket = session.begin();
    let service = Arc::clone(service);
    let session = Arc::clone(session);
    tracing::debug!(request, bytes = armored.len(), "key block submitted");

    tasks.spawn(async move { session.resolve(ticket, &service, &armored).await });
}
