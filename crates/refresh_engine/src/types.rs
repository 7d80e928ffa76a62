use std::fmt;

use thiserror::Error;

/// Sequence number of a poll cycle; the first fired check is cycle 1.
pub type PollCycle = u64;

/// Observability events emitted by the polling controller.
///
/// Events are drained through [`crate::RefreshHandle::try_recv`]; control
/// flow never depends on whether anyone is listening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A check finished normally, with or without a detected change.
    CheckCompleted { cycle: PollCycle, changed: bool },
    /// The extracted script set differs from the previous snapshot.
    ChangeDetected { cycle: PollCycle },
    /// A check failed; the loop halts after emitting this.
    CheckFailed { cycle: PollCycle, message: String },
    /// The user accepted the prompt and the page reload was triggered.
    ReloadTriggered { cycle: PollCycle },
    /// The loop exited without triggering a reload.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Transport-level fetch failure. HTTP status codes are not failures; the
/// response body is used whatever the status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Failure of one fetch-and-extract cycle.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}
