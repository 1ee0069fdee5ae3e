use std::fmt;

/// Errors reported by [`UiQueue`](super::UiQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `run_turn` was called from inside a task of the turn being run.
    Reentrant,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Reentrant => write!(f, "ui queue turn started from inside a running turn"),
        }
    }
}

impl std::error::Error for QueueError {}
