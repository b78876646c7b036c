//! Error types for timetable-engine operations.

use thiserror::Error;

/// Errors raised while turning catalog data into meeting patterns.
///
/// The search itself never fails: every error here comes from the boundary
/// adapter in [`crate::parse`].
#[derive(Error, Debug)]
pub enum TimetableError {
    /// The day pattern does not have exactly one slot per weekday.
    #[error("Invalid day pattern '{pattern}': expected {expected} slots, found {found}")]
    InvalidDayPattern {
        pattern: String,
        expected: usize,
        found: usize,
    },

    /// A day pattern slot is neither a day letter nor the `-` sentinel.
    #[error("Invalid day pattern '{pattern}': unexpected character '{ch}' in slot {slot}")]
    InvalidSlot {
        pattern: String,
        slot: usize,
        ch: char,
    },

    /// A clock value is not a well-formed `HHMM` time of day.
    #[error("Invalid time '{0}': expected HHMM")]
    InvalidTime(String),

    /// A time range is not of the form `HHMM-HHMM`.
    #[error("Invalid time range '{0}': expected HHMM-HHMM")]
    InvalidTimeRange(String),

    /// A regular meeting ends at or before it starts.
    #[error("Empty time range '{0}': end must be after start")]
    EmptyTimeRange(String),

    /// A section in the catalog carries a malformed meeting.
    #[error("Section '{section}': {source}")]
    Section {
        section: String,
        #[source]
        source: Box<TimetableError>,
    },

    /// The catalog document is not valid JSON for the expected shape.
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// A section id was referenced that no course in the catalog offers.
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Convenience alias used throughout timetable-engine.
pub type Result<T> = std::result::Result<T, TimetableError>;
