//! Timestamp source for encoded elements.

use chrono::{DateTime, Utc};

/// Layout of the `timestamp` attribute, e.g. `2020-05-01T12:30:00Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Supply the instant stamped onto every encoded element.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, TimeZone, Utc};
/// use osmfile_core::Clock;
///
/// struct Epoch;
///
/// impl Clock for Epoch {
///     fn now(&self) -> DateTime<Utc> {
///         Utc.timestamp_opt(0, 0).single().unwrap_or_default()
///     }
/// }
///
/// assert_eq!(Epoch.timestamp(), "1970-01-01T00:00:00Z");
/// ```
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current instant rendered with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall-clock time in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for reproducible documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
