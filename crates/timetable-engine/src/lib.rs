//! # timetable-engine
//!
//! Conflict-free timetable enumeration for course schedule builders.
//!
//! Given one list of candidate sections per course, the engine produces every
//! selection of exactly one section per course in which no two meetings
//! overlap. Overlap is decided per weekday slot with half-open time ranges,
//! and exam meetings never conflict with anything.
//!
//! ## Quick start
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use timetable_engine::{enumerate, CandidateSection, CourseChoiceGroup, MeetingPattern};
//!
//! let lec = |days, time| MeetingPattern::parse("LEC", days, time).unwrap();
//! let a = CourseChoiceGroup::new("A", vec![
//!     CandidateSection::new("A1", "A", vec![lec("M------", "0900-1000")]),
//!     CandidateSection::new("A2", "A", vec![lec("M------", "1000-1100")]),
//! ]);
//! let b = CourseChoiceGroup::new("B", vec![
//!     CandidateSection::new("B1", "B", vec![lec("M------", "0930-1000")]),
//! ]);
//!
//! let timetables = enumerate(&[a, b], NonZeroUsize::new(100).unwrap());
//! assert_eq!(timetables.len(), 1);
//! assert_eq!(timetables[0].section_ids(), vec!["A2", "B1"]);
//! ```
//!
//! ## Modules
//!
//! - [`pattern`] — meeting patterns: weekday masks, time ranges, meeting kinds
//! - [`parse`] — catalog strings / JSON → validated patterns and choice groups
//! - [`conflict`] — meeting and section conflict predicates
//! - [`enumerate`] — capped depth-first timetable search
//! - [`choice`] — hide/pin filtering applied before enumeration
//! - [`navigation`] — "timetable k of N" cursor
//! - [`error`] — Error types

pub mod choice;
pub mod conflict;
pub mod enumerate;
pub mod error;
pub mod navigation;
pub mod parse;
pub mod pattern;
pub mod section;

pub use choice::ChoiceFilter;
pub use conflict::{conflicts, find_meeting_conflicts, section_conflicts, MeetingConflict};
pub use enumerate::{
    enumerate, enumerate_with, EnumerateOptions, Enumeration, SearchOutcome, SearchStats,
    TruncationReason, DEFAULT_CAP,
};
pub use error::TimetableError;
pub use navigation::TimetableCursor;
pub use parse::{parse_clock, parse_day_pattern, parse_time_range, Catalog};
pub use pattern::{MeetingKind, MeetingPattern, TimeRange, WeekdayMask};
pub use section::{CandidateSection, CourseChoiceGroup, Timetable};
