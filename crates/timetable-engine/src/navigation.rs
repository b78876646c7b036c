//! "Timetable k of N" navigation over an enumeration result.

use serde::{Deserialize, Serialize};

/// The currently displayed index into a list of timetables.
///
/// Navigation wraps at both ends. When a re-enumeration returns fewer
/// timetables, [`TimetableCursor::resync`] clamps the index back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimetableCursor {
    index: usize,
    len: usize,
}

impl TimetableCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current index, or `None` when there is nothing to show.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 1-based `(k, n)` for "Timetable k of N" labels.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.index().map(|i| (i + 1, self.len))
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index()
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index()
    }

    /// Jump to `index`, clamped to the last timetable.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.index = index.min(self.len.saturating_sub(1));
        self.index()
    }

    /// Adopt a new result length, keeping the current index when it is still
    /// valid and clamping it to the last timetable otherwise.
    pub fn resync(&mut self, len: usize) -> Option<usize> {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
        self.index()
    }
}
