use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Errors raised while restoring a record from persisted state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Bad login history is not chronological at index {index}")]
    UnorderedHistory { index: usize },
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Malformed(err.to_string())
    }
}

impl Error {
    pub fn is_snapshot_error(&self) -> bool {
        matches!(self, Error::Snapshot(_))
    }
}
