// ── Conversion history ──────────────────────────────────────────────

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Number of entries a session keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAP: usize = 5;

/// Immutable record of one successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// `"<input> <source unit name>"`, e.g. `"1 Chilometri"`
    pub from: String,
    /// `"<formatted result> <destination unit name>"`, e.g. `"1000.000000 Metri"`
    pub to: String,
    /// Category display name
    pub category: String,
    pub created_at: DateTime<Local>,
}

impl HistoryEntry {
    /// Local time of day the conversion happened, `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }

    /// `"<category>: <from> → <to>"`
    pub fn summary(&self) -> String {
        format!("{}: {} → {}", self.category, self.from, self.to)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.time_label(), self.summary())
    }
}

/// Bounded, newest‑first list of [`HistoryEntry`].
///
/// Pushing beyond the capacity evicts the oldest entries.
#[derive(Debug, Clone, Serialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip)]
    cap: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAP)
    }

    /// Keep at most `cap` entries. Storage grows with use, so a large
    /// cap costs nothing up front.
    pub fn with_capacity(cap: usize) -> Self {
        let reserved = cap.min(DEFAULT_HISTORY_CAP) + 1;
        Self { entries: VecDeque::with_capacity(reserved), cap }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn capacity(&self) -> usize { self.cap }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self { Self::new() }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
