//! Time sources for login attempt records.
//!
//! Records never read the system time directly. Every decision is made from a
//! [`Clock`] handed to the record at construction, which keeps the state machine
//! deterministic under test.

use chrono::Utc;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// A source of the current time in milliseconds.
///
/// Any `Fn() -> Timestamp` is a clock, so tests can pass a closure or a plain
/// function:
///
/// ```rust
/// use torii_throttle::{Clock, Timestamp};
///
/// fn now() -> Timestamp {
///     1000
/// }
///
/// assert_eq!(now.now(), 1000);
/// ```
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<F> Clock for F
where
    F: Fn() -> Timestamp,
{
    fn now(&self) -> Timestamp {
        self()
    }
}

/// Wall clock backed by [`chrono::Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Pre-epoch readings are clamped to zero
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
