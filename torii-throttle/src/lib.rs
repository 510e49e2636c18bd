//! Login attempt throttling for the torii project
//!
//! This crate tracks failed logins per key (for example an IP address and email
//! pair) and decides when that key should be temporarily blocked.
//!
//! See [`LoginAttemptRecord`] for the state machine, [`RecordConfig`] for its
//! thresholds and [`RecordSnapshot`] for the persisted form handed to storage.
//!
//! Records take their time from an injected [`Clock`], so looking records up by
//! key, persisting them and serializing concurrent access are left to the caller.
//!
pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod record;
pub mod snapshot;

pub use action::Action;
pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use config::RecordConfig;
pub use error::{Error, SnapshotError};
pub use record::LoginAttemptRecord;
pub use snapshot::RecordSnapshot;
