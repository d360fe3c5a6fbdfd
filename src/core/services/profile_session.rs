use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::errors::Result;
use crate::core::models::key_profile::KeyProfile;
use crate::core::services::profile_service::ProfileService;
use crate::core::traits::key_reader::KeyReader;

/// Sequence number of one extraction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct SessionState {
    profile: Option<KeyProfile>,
    error: Option<String>,
    applied: u64,
}

/// Holds the profile of the most recent request.
///
/// Requests may finish in any order. An outcome is applied only while its
/// ticket is the newest one issued, so a slow old request can never
/// overwrite the result of a newer one.
#[derive(Debug, Default)]
pub struct ProfileSession {
    issued: AtomicU64,
    state: Mutex<SessionState>,
}

impl ProfileSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request. Supersedes every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply an outcome. Returns false if the ticket was superseded.
    ///
    /// A failure clears the previous profile.
    pub fn publish(&self, ticket: Ticket, outcome: Result<KeyProfile>) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !self.is_current(ticket) || ticket.0 <= state.applied {
            tracing::debug!(ticket = ticket.0, "discarding stale extraction result");
            return false;
        }

        state.applied = ticket.0;
        match outcome {
            Ok(profile) => {
                state.profile = Some(profile);
                state.error = None;
            }
            Err(err) => {
                state.profile = None;
                state.error = Some(err.to_string());
            }
        }
        true
    }

    /// Run one request for an already issued ticket and publish its outcome.
    pub async fn resolve<R: KeyReader>(
        &self,
        ticket: Ticket,
        service: &ProfileService<R>,
        armored: &str,
    ) -> bool {
        let outcome = service.extract(armored).await;
        self.publish(ticket, outcome)
    }

    pub fn current(&self) -> Option<KeyProfile> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .profile
            .clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .error
            .clone()
    }
}
