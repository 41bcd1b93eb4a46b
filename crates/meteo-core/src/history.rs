//! In-memory log of recorded readings.
//!
//! Ordering is by insertion with the most recent entry first, not by
//! timestamp. Growth is unbounded; the log is cleared only by explicit
//! action.

use std::collections::VecDeque;

use meteo_types::Reading;

/// Prepend-ordered log of recorded readings.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<Reading>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading at the front of the log.
    pub fn record(&mut self, reading: Reading) {
        self.entries.push_front(reading);
    }

    /// Remove all entries, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Number of recorded readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently recorded reading.
    #[must_use]
    pub fn latest(&self) -> Option<&Reading> {
        self.entries.front()
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.entries.iter()
    }

    /// Copy the log out, most recent first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Reading> {
        self.entries.iter().copied().collect()
    }
}
