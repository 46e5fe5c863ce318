use std::collections::VecDeque;

use crate::models::{AlignedDocument, Snapshot};

/// Bounded undo log of document snapshots, most recent last.
///
/// Pushing past the capacity evicts the oldest snapshot first.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack {
    pub const DEFAULT_CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A stack holding at most `capacity` snapshots (never fewer than one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a copy of `doc`, evicting the oldest entry when full
    pub fn record(&mut self, doc: &AlignedDocument) {
        self.entries.push_back(doc.snapshot());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Pop the most recent snapshot as the new live document
    pub fn undo(&mut self) -> Option<AlignedDocument> {
        self.entries.pop_back().map(Snapshot::restore)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshots from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
