//! Synthetic identifier allocation.
//!
//! OpenStreetMap editors treat negative ids as placeholders for entities
//! that do not exist upstream yet. Each allocator hands out `-1, -2, ...`
//! and never repeats a value.

use std::sync::atomic::{AtomicI64, Ordering};

use log::debug;

const FIRST_SYNTHETIC_ID: i64 = -1;

/// Decreasing counter for placeholder identifiers.
///
/// Allocation is a single atomic fetch-and-decrement, so one allocator may
/// be shared by several producer threads without handing out duplicates.
///
/// # Examples
/// ```
/// use osmfile_core::SyntheticIds;
///
/// let ids = SyntheticIds::new();
/// assert_eq!(ids.allocate(), -1);
/// assert_eq!(ids.allocate(), -2);
/// assert_eq!(ids.peek(), -3);
/// ```
#[derive(Debug)]
pub struct SyntheticIds {
    next: AtomicI64,
}

impl SyntheticIds {
    /// Create an allocator whose first id is `-1`.
    pub const fn new() -> Self {
        Self {
            next: AtomicI64::new(FIRST_SYNTHETIC_ID),
        }
    }

    /// Take the next identifier.
    pub fn allocate(&self) -> i64 {
        // Uniqueness only needs the read-modify-write to be atomic.
        let id = self.next.fetch_sub(1, Ordering::Relaxed);
        debug!("allocated synthetic id {id}");
        id
    }

    /// Identifier the next call to [`Self::allocate`] would return.
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Resolve an explicit identifier, falling back to a fresh synthetic one.
    pub fn resolve(&self, explicit: Option<i64>) -> i64 {
        explicit.unwrap_or_else(|| self.allocate())
    }
}

impl Default for SyntheticIds {
    fn default() -> Self {
        Self::new()
    }
}
