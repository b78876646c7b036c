//! Meeting patterns -- the weekday/time footprint of one recurring meeting.
//!
//! A [`MeetingPattern`] pairs a [`WeekdayMask`] (which weekday slots the
//! meeting occupies, Monday first) with a [`TimeRange`] in minutes since
//! midnight. Patterns are plain values; the overlap rules live in
//! [`crate::conflict`] and the string parsing in [`crate::parse`].

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Number of weekday slots in a day pattern.
pub const DAYS_PER_WEEK: usize = 7;

/// Weekdays in slot order. Slot `i` of every mask refers to `WEEKDAYS[i]`.
pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Canonical letters used when rendering a mask back to a day pattern.
const DAY_LETTERS: [char; DAYS_PER_WEEK] = ['M', 'T', 'W', 'R', 'F', 'S', 'U'];

/// What sort of meeting a pattern describes.
///
/// Only the `Exam` distinction matters to conflict detection; the regular
/// kinds are kept so callers can render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeetingKind {
    #[default]
    Lecture,
    Lab,
    Seminar,
    Tutorial,
    /// A one-off exam slot. Exempt from every conflict check.
    Exam,
    /// Any other recurring meeting type the catalog reports.
    Other,
}

impl MeetingKind {
    /// Map a free-form catalog type label onto a kind (case-insensitive).
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "LEC" | "LECTURE" => MeetingKind::Lecture,
            "LAB" | "LABORATORY" => MeetingKind::Lab,
            "SEM" | "SEMINAR" => MeetingKind::Seminar,
            "TUT" | "TUTORIAL" => MeetingKind::Tutorial,
            "EXAM" | "FINAL" | "MIDTERM" => MeetingKind::Exam,
            _ => MeetingKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingKind::Lecture => "LEC",
            MeetingKind::Lab => "LAB",
            MeetingKind::Seminar => "SEM",
            MeetingKind::Tutorial => "TUT",
            MeetingKind::Exam => "EXAM",
            MeetingKind::Other => "OTHER",
        }
    }

    pub fn is_exam(&self) -> bool {
        matches!(self, MeetingKind::Exam)
    }
}

impl fmt::Display for MeetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which weekday slots a meeting occupies, one bit per slot (bit 0 = Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    /// A mask that meets on no day at all.
    pub const EMPTY: WeekdayMask = WeekdayMask(0);

    /// Build a mask from per-slot flags in Monday-first order.
    pub fn from_slots(slots: [bool; DAYS_PER_WEEK]) -> Self {
        let bits = slots
            .iter()
            .enumerate()
            .filter(|(_, meets)| **meets)
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        WeekdayMask(bits)
    }

    /// Build a mask meeting on each of the given weekdays.
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let bits = days
            .iter()
            .fold(0u8, |acc, day| acc | (1 << day.num_days_from_monday()));
        WeekdayMask(bits)
    }

    pub fn meets_on(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Slots where both masks meet.
    pub fn intersection(&self, other: &WeekdayMask) -> WeekdayMask {
        WeekdayMask(self.0 & other.0)
    }

    /// The weekdays this mask meets on, Monday first.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS.iter().copied().filter(|d| self.meets_on(*d))
    }
}

impl fmt::Display for WeekdayMask {
    /// Renders the canonical day pattern, e.g. `M-W-F--`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day, letter) in WEEKDAYS.iter().zip(DAY_LETTERS) {
            let ch = if self.meets_on(*day) { letter } else { '-' };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// A time-of-day interval in minutes since midnight, compared half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

impl TimeRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Ranges that merely touch (one ends exactly when the other starts)
    /// do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the shared interval, or 0 when the ranges do not overlap.
    pub fn overlap_minutes(&self, other: &TimeRange) -> u16 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// True for zero-length and reversed ranges (`end <= start`).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for TimeRange {
    /// Renders the `HHMM-HHMM` form the catalog uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}-{:02}{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// One recurring meeting of a section, or a one-off exam slot.
///
/// Serializes to and from the catalog's string form
/// (`{"kind": "LEC", "days": "M-W----", "time": "1000-1050"}`), going through
/// the validating parser on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMeeting", into = "RawMeeting")]
pub struct MeetingPattern {
    pub kind: MeetingKind,
    pub days: WeekdayMask,
    pub time: TimeRange,
}

impl MeetingPattern {
    pub fn new(kind: MeetingKind, days: WeekdayMask, time: TimeRange) -> Self {
        Self { kind, days, time }
    }
}

/// String form of a meeting as delivered by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMeeting {
    #[serde(default)]
    pub kind: String,
    pub days: String,
    pub time: String,
}

impl From<MeetingPattern> for RawMeeting {
    fn from(p: MeetingPattern) -> Self {
        Self {
            kind: p.kind.as_str().to_string(),
            days: p.days.to_string(),
            time: p.time.to_string(),
        }
    }
}

impl TryFrom<RawMeeting> for MeetingPattern {
    type Error = crate::error::TimetableError;

    fn try_from(raw: RawMeeting) -> Result<Self, Self::Error> {
        MeetingPattern::parse(&raw.kind, &raw.days, &raw.time)
    }
}
