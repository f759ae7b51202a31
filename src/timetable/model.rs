//! Problem model: courses, rooms, and time slots.
//!
//! Course records arrive loosely typed (any field may be missing) and are
//! resolved once into [`Course`] values with defaults applied. The resulting
//! [`Timetable`] is read-only for the whole run.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{Error, Result};

/// Day labels of the reference weekly universe.
const WEEKDAYS: [&str; 5] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat"];

/// Room labels of the reference weekly universe.
const ROOM_LABELS: [&str; 3] = ["Ruang A", "Ruang B", "Ruang C"];

/// A course as supplied by the caller, before validation.
///
/// With the `serde` feature the field names follow the dataset columns
/// `CourseID, CourseName, Dosen, Durasi, PreferensiHari`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseRecord {
    /// Course identifier. Required.
    #[cfg_attr(feature = "serde", serde(rename = "CourseID", default))]
    pub id: Option<String>,

    /// Display name. Defaults to the identifier.
    #[cfg_attr(feature = "serde", serde(rename = "CourseName", default))]
    pub name: Option<String>,

    /// Lecturer identity. Required.
    #[cfg_attr(feature = "serde", serde(rename = "Dosen", default))]
    pub lecturer: Option<String>,

    /// Duration in slot units. Defaults to 1.
    #[cfg_attr(feature = "serde", serde(rename = "Durasi", default))]
    pub duration: Option<u32>,

    /// Free-form preferred-day text, e.g. `"Senin, Rabu"`.
    #[cfg_attr(feature = "serde", serde(rename = "PreferensiHari", default))]
    pub preferred_day: Option<String>,
}

impl CourseRecord {
    /// Creates a record with the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lecturer: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            lecturer: Some(lecturer.into()),
            duration: None,
            preferred_day: None,
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the preferred-day text.
    pub fn with_preferred_day(mut self, day: impl Into<String>) -> Self {
        self.preferred_day = Some(day.into());
        self
    }

    /// Validates the record and applies defaults.
    ///
    /// `index` is the record's position, used for error reporting.
    pub fn resolve(self, index: usize) -> Result<Course> {
        let id = required(self.id, index, "id")?;
        let lecturer = required(self.lecturer, index, "lecturer")?;
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| id.clone());

        let duration = match self.duration {
            None => 1,
            Some(0) => {
                return Err(Error::MalformedCourse {
                    index,
                    field: "duration",
                })
            }
            Some(d) => d,
        };

        let preferred_day = self
            .preferred_day
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        let preference_key = preferred_day.as_deref().map(str::to_lowercase);

        Ok(Course {
            id,
            name,
            lecturer,
            duration,
            preferred_day,
            preference_key,
        })
    }
}

fn required(value: Option<String>, index: usize, field: &'static str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(Error::MalformedCourse { index, field })
}

/// A validated course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
    lecturer: String,
    duration: u32,
    preferred_day: Option<String>,
    /// Lower-cased `preferred_day`, matched against slot day tokens.
    preference_key: Option<String>,
}

impl Course {
    /// Resolves a list of records, failing on the first malformed one.
    pub fn from_records(records: Vec<CourseRecord>) -> Result<Vec<Course>> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.resolve(i))
            .collect()
    }

    /// Course identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lecturer identity.
    pub fn lecturer(&self) -> &str {
        &self.lecturer
    }

    /// Duration in slot units (at least 1).
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Preferred-day text as supplied, if any.
    pub fn preferred_day(&self) -> Option<&str> {
        self.preferred_day.as_deref()
    }

    /// Whether a slot on `day` (a canonical lower-case token) satisfies
    /// this course's preference. Courses without a preference accept any day.
    pub fn accepts_day(&self, day: &str) -> bool {
        match &self.preference_key {
            Some(pref) => pref.contains(day),
            None => true,
        }
    }
}

/// A room. Identified by index; the label is only used for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    label: String,
}

impl Room {
    /// Creates a room.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A time slot carrying a canonical day token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    label: String,
    day: String,
}

impl TimeSlot {
    /// Creates a slot. The day token is trimmed and lower-cased.
    pub fn new(label: impl Into<String>, day: &str) -> Self {
        Self {
            label: label.into(),
            day: day.trim().to_lowercase(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Canonical (lower-case) day token.
    pub fn day(&self) -> &str {
        &self.day
    }
}

/// The fixed universe of one timetabling run.
#[derive(Debug, Clone)]
pub struct Timetable {
    courses: Vec<Course>,
    /// Interned lecturer id per course.
    lecturer_ids: Vec<usize>,
    rooms: Vec<Room>,
    slots: Vec<TimeSlot>,
}

impl Timetable {
    /// Creates a timetable.
    ///
    /// Fails when courses are given but there are no rooms or no slots. An
    /// empty course list is accepted and logged as degenerate.
    pub fn new(courses: Vec<Course>, rooms: Vec<Room>, slots: Vec<TimeSlot>) -> Result<Self> {
        if courses.is_empty() {
            warn!("empty course list: every chromosome will be empty");
        } else if rooms.is_empty() || slots.is_empty() {
            return Err(Error::EmptyUniverse {
                courses: courses.len(),
                rooms: rooms.len(),
                slots: slots.len(),
            });
        }

        let mut interned: HashMap<&str, usize> = HashMap::new();
        let lecturer_ids = courses
            .iter()
            .map(|c| {
                let next = interned.len();
                *interned.entry(c.lecturer()).or_insert(next)
            })
            .collect();

        Ok(Self {
            courses,
            lecturer_ids,
            rooms,
            slots,
        })
    }

    /// Resolves raw records and creates a timetable.
    pub fn from_records(
        records: Vec<CourseRecord>,
        rooms: Vec<Room>,
        slots: Vec<TimeSlot>,
    ) -> Result<Self> {
        Self::new(Course::from_records(records)?, rooms, slots)
    }

    /// The reference weekly universe: rooms `Ruang A`–`Ruang C` and one slot
    /// per weekday, `Slot 1 (Senin)` through `Slot 5 (Jumat)`.
    pub fn weekly(courses: Vec<Course>) -> Result<Self> {
        let rooms = ROOM_LABELS.iter().map(|&l| Room::new(l)).collect();
        let slots = WEEKDAYS
            .iter()
            .enumerate()
            .map(|(i, day)| TimeSlot::new(format!("Slot {} ({day})", i + 1), day))
            .collect();
        Self::new(courses, rooms, slots)
    }

    /// Courses in chromosome order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Rooms.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Time slots.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of courses (chromosome length).
    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    /// Number of rooms (R).
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Number of slots (S).
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Interned lecturer id of course `course`. Courses share an id exactly
    /// when they share a lecturer.
    pub fn lecturer_id(&self, course: usize) -> usize {
        self.lecturer_ids[course]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_defaults() {
        let course = CourseRecord {
            id: Some("IF101".into()),
            lecturer: Some("Budi".into()),
            ..Default::default()
        }
        .resolve(0)
        .unwrap();

        assert_eq!(course.id(), "IF101");
        assert_eq!(course.name(), "IF101");
        assert_eq!(course.duration(), 1);
        assert_eq!(course.preferred_day(), None);
        assert!(course.accepts_day("senin"));
    }

    #[test]
    fn test_resolve_rejects_missing_required_fields() {
        let err = CourseRecord {
            lecturer: Some("Budi".into()),
            ..Default::default()
        }
        .resolve(4);
        assert_eq!(
            err,
            Err(Error::MalformedCourse {
                index: 4,
                field: "id"
            })
        );

        let err = CourseRecord::new("IF101", "Algo", "   ").resolve(1);
        assert_eq!(
            err,
            Err(Error::MalformedCourse {
                index: 1,
                field: "lecturer"
            })
        );
    }

    #[test]
    fn test_resolve_rejects_zero_duration() {
        let err = CourseRecord::new("IF101", "Algo", "Budi")
            .with_duration(0)
            .resolve(2);
        assert_eq!(
            err,
            Err(Error::MalformedCourse {
                index: 2,
                field: "duration"
            })
        );
    }

    #[test]
    fn test_preference_matching_is_case_insensitive() {
        let course = CourseRecord::new("IF101", "Algo", "Budi")
            .with_preferred_day("Senin, RABU")
            .resolve(0)
            .unwrap();

        assert!(course.accepts_day("senin"));
        assert!(course.accepts_day("rabu"));
        assert!(!course.accepts_day("jumat"));
        assert_eq!(course.preferred_day(), Some("Senin, RABU"));
    }

    #[test]
    fn test_blank_preference_means_none() {
        let course = CourseRecord::new("IF101", "Algo", "Budi")
            .with_preferred_day("  ")
            .resolve(0)
            .unwrap();
        assert_eq!(course.preferred_day(), None);
        assert!(course.accepts_day("kamis"));
    }

    #[test]
    fn test_from_records_reports_first_bad_index() {
        let records = vec![
            CourseRecord::new("A", "A", "X"),
            CourseRecord::new("B", "B", "Y"),
            CourseRecord::new("", "C", "Z"),
        ];
        assert_eq!(
            Course::from_records(records),
            Err(Error::MalformedCourse {
                index: 2,
                field: "id"
            })
        );
    }

    #[test]
    fn test_weekly_universe() {
        let courses = Course::from_records(vec![CourseRecord::new("A", "A", "X")]).unwrap();
        let tt = Timetable::weekly(courses).unwrap();

        assert_eq!(tt.num_rooms(), 3);
        assert_eq!(tt.num_slots(), 5);
        assert_eq!(tt.rooms()[1].label(), "Ruang B");
        assert_eq!(tt.slots()[0].label(), "Slot 1 (Senin)");
        assert_eq!(tt.slots()[4].day(), "jumat");
    }

    #[test]
    fn test_lecturers_are_interned() {
        let courses = Course::from_records(vec![
            CourseRecord::new("A", "A", "Budi"),
            CourseRecord::new("B", "B", "Sari"),
            CourseRecord::new("C", "C", "Budi"),
        ])
        .unwrap();
        let tt = Timetable::weekly(courses).unwrap();

        assert_eq!(tt.lecturer_id(0), tt.lecturer_id(2));
        assert_ne!(tt.lecturer_id(0), tt.lecturer_id(1));
    }

    #[test]
    fn test_empty_universe_rejected_only_with_courses() {
        let courses = Course::from_records(vec![CourseRecord::new("A", "A", "X")]).unwrap();
        let err = Timetable::new(courses, vec![], vec![TimeSlot::new("S1", "Senin")]);
        assert_eq!(
            err.unwrap_err(),
            Error::EmptyUniverse {
                courses: 1,
                rooms: 0,
                slots: 1
            }
        );

        let tt = Timetable::new(vec![], vec![], vec![]).unwrap();
        assert_eq!(tt.num_courses(), 0);
    }

    #[test]
    fn test_slot_day_is_canonical() {
        let slot = TimeSlot::new("Morning", " Monday ");
        assert_eq!(slot.day(), "monday");
        assert_eq!(slot.label(), "Morning");
    }
}
