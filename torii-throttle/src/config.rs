use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Thresholds controlling when a record blocks and how long the block lasts.
///
/// The same interval is used both as the block duration and as the age after
/// which a recorded bad login stops counting towards the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// How long a block stays active, in milliseconds.
    pub block_interval_ms: u64,
    /// Number of bad logins tolerated before a block is warranted.
    pub bad_login_limit: u32,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            block_interval_ms: 15 * 60 * 1000,
            bad_login_limit: 5,
        }
    }
}

impl RecordConfig {
    pub fn new(block_interval_ms: u64, bad_login_limit: u32) -> Self {
        Self {
            block_interval_ms,
            bad_login_limit,
        }
    }

    /// Set the block interval from a [`chrono::Duration`].
    ///
    /// Negative durations are treated as zero.
    pub fn with_block_interval(mut self, interval: Duration) -> Self {
        self.block_interval_ms = u64::try_from(interval.num_milliseconds()).unwrap_or(0);
        self
    }

    pub fn with_bad_login_limit(mut self, limit: u32) -> Self {
        self.bad_login_limit = limit;
        self
    }

    /// Largest history length kept after trimming.
    pub(crate) fn max_retained(&self) -> usize {
        self.bad_login_limit as usize + 1
    }
}
