//! Boundary adapter -- catalog strings into validated meeting patterns.
//!
//! The catalog API reports meetings as a fixed-width day pattern (`M-W-F--`,
//! one slot per weekday, `-` for "does not meet") and an `HHMM-HHMM` time
//! string. Anything that does not fit that shape is rejected here, so a
//! malformed meeting can never reach the enumerator disguised as a pattern
//! that conflicts with nothing.

use serde::{Deserialize, Serialize};

use crate::choice::ChoiceFilter;
use crate::error::{Result, TimetableError};
use crate::pattern::{
    MeetingKind, MeetingPattern, RawMeeting, TimeRange, WeekdayMask, DAYS_PER_WEEK,
};
use crate::section::{CandidateSection, CourseChoiceGroup};

/// Parse a fixed-width day pattern such as `M-W-F--` or `-T-R---`.
///
/// Slot `i` is Monday + `i`. A letter means the meeting falls on that day,
/// `-` means it does not. The pattern must have exactly [`DAYS_PER_WEEK`]
/// slots. An all-`-` pattern is accepted and yields an empty mask.
pub fn parse_day_pattern(pattern: &str) -> Result<WeekdayMask> {
    let found = pattern.chars().count();
    if found != DAYS_PER_WEEK {
        return Err(TimetableError::InvalidDayPattern {
            pattern: pattern.to_string(),
            expected: DAYS_PER_WEEK,
            found,
        });
    }

    let mut slots = [false; DAYS_PER_WEEK];
    for (slot, ch) in pattern.chars().enumerate() {
        slots[slot] = match ch {
            '-' => false,
            c if c.is_ascii_alphabetic() => true,
            c => {
                return Err(TimetableError::InvalidSlot {
                    pattern: pattern.to_string(),
                    slot,
                    ch: c,
                })
            }
        };
    }

    Ok(WeekdayMask::from_slots(slots))
}

/// Parse an `HHMM` clock value into minutes since midnight (`"1830"` -> 1110).
pub fn parse_clock(clock: &str) -> Result<u16> {
    let invalid = || TimetableError::InvalidTime(clock.to_string());

    if clock.len() != 4 || !clock.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: u16 = clock[..2].parse().map_err(|_| invalid())?;
    let minutes: u16 = clock[2..].parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Parse an `HHMM-HHMM` time range.
///
/// Only the shape is checked here; ordering depends on the meeting kind and
/// is enforced by [`MeetingPattern::parse`].
pub fn parse_time_range(range: &str) -> Result<TimeRange> {
    let (start, end) = range
        .trim()
        .split_once('-')
        .ok_or_else(|| TimetableError::InvalidTimeRange(range.to_string()))?;

    Ok(TimeRange::new(parse_clock(start)?, parse_clock(end)?))
}

impl MeetingPattern {
    /// Build a pattern from the catalog's kind label, day pattern, and time
    /// string.
    ///
    /// # Errors
    /// Returns `TimetableError::InvalidDayPattern` / `InvalidSlot` for a bad day
    /// pattern, `InvalidTime` / `InvalidTimeRange` for a bad time string, and
    /// `EmptyTimeRange` when a non-exam meeting does not end after it starts.
    pub fn parse(kind: &str, days: &str, time: &str) -> Result<MeetingPattern> {
        let kind = MeetingKind::from_label(kind);
        let days = parse_day_pattern(days)?;
        let range = parse_time_range(time)?;

        if !kind.is_exam() && range.end <= range.start {
            return Err(TimetableError::EmptyTimeRange(time.to_string()));
        }

        Ok(MeetingPattern::new(kind, days, range))
    }
}

/// A catalog snapshot: the selected courses, their sections in preference
/// order, and the user's hide/pin state per course.
///
/// ```json
/// {
///   "courses": [
///     {
///       "code": "CS101",
///       "hidden": ["CS101-C"],
///       "pinned": null,
///       "sections": [
///         { "id": "CS101-A", "meetings": [{ "kind": "LEC", "days": "M-W----", "time": "0900-1000" }] }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<CatalogCourse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCourse {
    pub code: String,
    #[serde(default)]
    pub sections: Vec<CatalogSection>,
    #[serde(flatten)]
    pub filter: ChoiceFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub id: String,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,
}

impl CatalogSection {
    fn parse(&self, course: &str) -> Result<CandidateSection> {
        let meetings = self
            .meetings
            .iter()
            .map(|m| MeetingPattern::parse(&m.kind, &m.days, &m.time))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| TimetableError::Section {
                section: self.id.clone(),
                source: Box::new(e),
            })?;

        Ok(CandidateSection {
            id: self.id.clone(),
            course: course.to_string(),
            cancelled: self.cancelled,
            meetings,
        })
    }
}

impl CatalogCourse {
    /// Every section of this course, parsed, before any filtering.
    pub fn group(&self) -> Result<CourseChoiceGroup> {
        let sections = self
            .sections
            .iter()
            .map(|s| s.parse(&self.code))
            .collect::<Result<Vec<_>>>()?;
        Ok(CourseChoiceGroup::new(self.code.clone(), sections))
    }
}

impl Catalog {
    /// Parse a catalog from its JSON form. Meetings are validated lazily by
    /// [`Catalog::choice_groups`] and [`Catalog::section`].
    pub fn from_json(json: &str) -> Result<Catalog> {
        Ok(serde_json::from_str(json)?)
    }

    /// One choice group per course, in catalog order, with each course's
    /// hide/pin filter applied.
    ///
    /// # Errors
    /// Fails on the first malformed meeting, naming its section.
    pub fn choice_groups(&self) -> Result<Vec<CourseChoiceGroup>> {
        self.courses
            .iter()
            .map(|course| Ok(course.filter.apply(&course.group()?)))
            .collect()
    }

    /// Look up and parse one section by id, ignoring hide/pin state.
    pub fn section(&self, id: &str) -> Result<CandidateSection> {
        for course in &self.courses {
            if let Some(section) = course.sections.iter().find(|s| s.id == id) {
                return section.parse(&course.code);
            }
        }
        Err(TimetableError::UnknownSection(id.to_string()))
    }
}
