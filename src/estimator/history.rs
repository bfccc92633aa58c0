//! Append-only log of π estimates across runs.

use serde::{Deserialize, Serialize};

/// One recorded run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 0-based run index.
    pub index: usize,
    /// π estimate produced by the run.
    pub estimate: f64,
    /// Number of samples in the run.
    pub batch_size: u64,
}

/// Ordered estimates, one per completed run.
///
/// There is no removal or update; the log only grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an estimate and return its 0-based position.
    pub fn append(&mut self, estimate: f64, batch_size: u64) -> usize {
        let index = self.entries.len();
        self.entries.push(HistoryEntry {
            index,
            estimate,
            batch_size,
        });
        index
    }

    /// Number of recorded runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no run has completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entries in run order.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Estimates in run order.
    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.estimate)
    }

    /// Mean of all recorded estimates, `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.estimates().sum::<f64>() / self.entries.len() as f64)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
