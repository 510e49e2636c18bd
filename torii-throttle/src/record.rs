//! Login attempt record for brute force throttling.
//!
//! A [`LoginAttemptRecord`] tracks failed logins for a single key, typically an
//! IP address and email pair, and decides when that key should be blocked from
//! further attempts.
//!
//! # Lifecycle
//!
//! - Failed logins are appended with [`LoginAttemptRecord::add_bad_login`]
//! - Applying an `accountLogin` action blocks the key once the history exceeds
//!   the configured limit
//! - A block lasts for the configured interval, after which
//!   [`LoginAttemptRecord::unblock_if_reset`] returns the record to a clean state
//! - History older than the block interval stops counting and is trimmed away
//!
//! # Example
//!
//! ```rust
//! use torii_throttle::{FixedClock, LoginAttemptRecord, RecordConfig};
//!
//! let mut record = LoginAttemptRecord::new(RecordConfig::new(500, 2), FixedClock(1000));
//! for _ in 0..3 {
//!     record.add_bad_login();
//! }
//! record.apply_action(Some("accountLogin"));
//! assert!(record.is_blocked());
//! ```
//!
//! # Thread Safety
//!
//! Records perform no internal synchronization. Whatever owns a record must make
//! sure only one caller mutates it at a time.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::{
    Error,
    action::Action,
    clock::{Clock, SystemClock, Timestamp},
    config::RecordConfig,
    error::SnapshotError,
    snapshot::RecordSnapshot,
};

const MILLIS_PER_SECOND: u64 = 1000;

/// Bad login history and block state for one key.
#[derive(Clone)]
pub struct LoginAttemptRecord<C = SystemClock> {
    bad_logins: Vec<Timestamp>,
    blocked_at: Option<Timestamp>,
    config: RecordConfig,
    clock: C,
}

impl<C> fmt::Debug for LoginAttemptRecord<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttemptRecord")
            .field("bad_logins", &self.bad_logins)
            .field("blocked_at", &self.blocked_at)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> LoginAttemptRecord<C> {
    /// Create an empty, unblocked record.
    pub fn new(config: RecordConfig, clock: C) -> Self {
        Self {
            bad_logins: Vec::new(),
            blocked_at: None,
            config,
            clock,
        }
    }

    /// Restore a record from a snapshot.
    ///
    /// The snapshot is validated and copied, so the restored record shares no
    /// storage with it.
    ///
    /// # Arguments
    ///
    /// * `config` - Thresholds for the restored record
    /// * `clock` - Time source for the restored record
    /// * `snapshot` - Previously persisted state
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if the bad login history is not chronological.
    pub fn from_snapshot(
        config: RecordConfig,
        clock: C,
        snapshot: &RecordSnapshot,
    ) -> Result<Self, Error> {
        if let Err(e) = snapshot.validate() {
            warn!(error = %e, "Rejected login attempt snapshot");
            return Err(e.into());
        }

        Ok(Self {
            bad_logins: snapshot.bad_logins.clone(),
            blocked_at: snapshot.blocked_at,
            config,
            clock,
        })
    }

    /// Parse a JSON snapshot and restore a record from it.
    pub fn from_json(config: RecordConfig, clock: C, json: &str) -> Result<Self, Error> {
        let snapshot: RecordSnapshot = match serde_json::from_str(json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Rejected malformed login attempt snapshot");
                return Err(SnapshotError::from(e).into());
            }
        };
        Self::from_snapshot(config, clock, &snapshot)
    }

    pub fn to_snapshot(&self) -> RecordSnapshot {
        RecordSnapshot {
            bad_logins: self.bad_logins.clone(),
            blocked_at: self.blocked_at,
        }
    }

    pub fn config(&self) -> &RecordConfig {
        &self.config
    }

    /// Bad login times currently held, oldest first.
    pub fn bad_logins(&self) -> &[Timestamp] {
        &self.bad_logins
    }

    pub fn blocked_at(&self) -> Option<Timestamp> {
        self.blocked_at
    }

    /// Number of bad logins currently counted against the key.
    pub fn failed_attempts(&self) -> usize {
        self.bad_logins.len()
    }

    /// Check if the key is currently blocked.
    ///
    /// A block expires once exactly `block_interval_ms` has elapsed.
    pub fn is_blocked(&self) -> bool {
        self.blocked_at
            .is_some_and(|at| self.clock.now().saturating_sub(at) < self.config.block_interval_ms)
    }

    /// Check if more bad logins are held than the limit tolerates.
    pub fn is_over_bad_login_limit(&self) -> bool {
        self.bad_logins.len() > self.config.bad_login_limit as usize
    }

    /// Whole seconds the caller should wait before trying again.
    ///
    /// Returns 0 when the key is not blocked. Otherwise the remaining block time
    /// is rounded up, so a block with any time left never reports 0.
    pub fn retry_after_seconds(&self) -> u64 {
        let Some(blocked_at) = self.blocked_at else {
            return 0;
        };

        let elapsed = self.clock.now().saturating_sub(blocked_at);
        self.config
            .block_interval_ms
            .saturating_sub(elapsed)
            .div_ceil(MILLIS_PER_SECOND)
    }

    /// Record a bad login at the current time.
    pub fn add_bad_login(&mut self) {
        let now = self.clock.now();
        self.bad_logins.push(now);
        self.trim_bad_logins(now);
    }

    /// Drop expired bad logins and cap the history length.
    ///
    /// Entries at least `block_interval_ms` old are removed. If more than
    /// `bad_login_limit + 1` entries remain, only the most recent ones are kept.
    ///
    /// # Arguments
    ///
    /// * `now` - The time to measure entry age against
    pub fn trim_bad_logins(&mut self, now: Timestamp) {
        let interval = self.config.block_interval_ms;
        self.bad_logins.retain(|&at| now.saturating_sub(at) < interval);

        let max = self.config.max_retained();
        if self.bad_logins.len() > max {
            let excess = self.bad_logins.len() - max;
            self.bad_logins.drain(..excess);
            trace!(dropped = excess, "Capped bad login history");
        }
    }

    /// Block the key starting now.
    ///
    /// The bad login history is cleared since the block is the penalty for it.
    pub fn block(&mut self) {
        let now = self.clock.now();
        self.blocked_at = Some(now);
        self.bad_logins.clear();
        debug!(blocked_at = now, "Blocked login attempts");
    }

    /// Reset the record if its block has fully elapsed.
    ///
    /// Leaves the record untouched if it was never blocked or the block is still
    /// running.
    pub fn unblock_if_reset(&mut self, now: Timestamp) {
        let Some(blocked_at) = self.blocked_at else {
            return;
        };

        if now.saturating_sub(blocked_at) >= self.config.block_interval_ms {
            self.blocked_at = None;
            self.bad_logins.clear();
            debug!(blocked_at, "Block elapsed, reset login attempts");
        }
    }

    /// Evaluate an action against the current state.
    ///
    /// For [`Action::AccountLogin`] the history is trimmed and the key is
    /// blocked if it is over the limit. The failure itself is not recorded here;
    /// call [`add_bad_login`](Self::add_bad_login) for that.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AccountLogin => {
                let now = self.clock.now();
                self.trim_bad_logins(now);
                if self.is_over_bad_login_limit() {
                    self.block();
                }
            }
        }
    }

    /// Evaluate an action given by its wire name.
    ///
    /// Missing or unrecognized actions leave the record unchanged. Always
    /// returns 0; query [`is_blocked`](Self::is_blocked) for the outcome.
    pub fn apply_action(&mut self, action: Option<&str>) -> u32 {
        match action.map(|name| (name, Action::from_name(name))) {
            Some((_, Some(action))) => self.apply(action),
            Some((name, None)) => trace!(action = name, "Ignoring unrecognized action"),
            None => {}
        }
        0
    }
}
