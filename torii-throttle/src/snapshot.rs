//! Persisted form of a login attempt record.
//!
//! A snapshot holds only state. Thresholds and the clock come from whoever
//! restores it, so the same snapshot can be loaded under a different config.

use serde::{Deserialize, Serialize};

use crate::{clock::Timestamp, error::SnapshotError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// Bad login times, oldest first.
    #[serde(default)]
    pub bad_logins: Vec<Timestamp>,
    /// When the record was last blocked, if it still is.
    #[serde(default)]
    pub blocked_at: Option<Timestamp>,
}

impl RecordSnapshot {
    /// Check that the snapshot describes a state a record could have produced.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        match self.bad_logins.windows(2).position(|w| w[0] > w[1]) {
            Some(i) => Err(SnapshotError::UnorderedHistory { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: RecordSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}
