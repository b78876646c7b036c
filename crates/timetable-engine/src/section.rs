//! Sections, per-course choice groups, and the timetables built from them.

use serde::{Deserialize, Serialize};

use crate::pattern::MeetingPattern;

/// One offering of a course: the atomic unit the enumerator selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateSection {
    /// Opaque section identifier (e.g., "CS101-A").
    pub id: String,
    /// The course this section belongs to.
    pub course: String,
    /// Cancelled sections are dropped by [`crate::choice::ChoiceFilter`];
    /// the enumerator itself never looks at this flag.
    #[serde(default)]
    pub cancelled: bool,
    /// Zero or more meeting patterns, in catalog order.
    #[serde(default)]
    pub meetings: Vec<MeetingPattern>,
}

impl CandidateSection {
    pub fn new(
        id: impl Into<String>,
        course: impl Into<String>,
        meetings: Vec<MeetingPattern>,
    ) -> Self {
        Self {
            id: id.into(),
            course: course.into(),
            cancelled: false,
            meetings,
        }
    }
}

/// The sections currently eligible for one course, in preference order.
///
/// Order matters: it decides which timetables the enumerator finds first.
/// An empty group is legal and makes every enumeration come back empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChoiceGroup {
    pub course: String,
    pub sections: Vec<CandidateSection>,
}

impl CourseChoiceGroup {
    pub fn new(course: impl Into<String>, sections: Vec<CandidateSection>) -> Self {
        Self {
            course: course.into(),
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// One conflict-free selection of exactly one section per course, in course
/// input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Timetable {
    pub sections: Vec<CandidateSection>,
}

impl Timetable {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Section ids in course order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// The section chosen for `course`, if that course is part of this timetable.
    pub fn section_for(&self, course: &str) -> Option<&CandidateSection> {
        self.sections.iter().find(|s| s.course == course)
    }
}
