//! Error types.
//!
//! Configuration problems are reported before a run starts. Malformed course
//! records are reported while resolving the input. Nothing in the evolutionary
//! loop itself returns an error once the inputs have been validated.

use thiserror::Error;

/// Errors produced by `u-timetable`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `population_size` is below 2.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// `max_generations` is zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// A probability parameter is outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Tournament needs more distinct individuals than the population holds.
    #[error("tournament size {size} exceeds population size {population}")]
    TournamentTooLarge {
        /// Requested tournament size.
        size: usize,
        /// Population size.
        population: usize,
    },

    /// Courses were supplied but there is nowhere to put them.
    #[error("cannot schedule {courses} course(s) into {rooms} room(s) x {slots} slot(s)")]
    EmptyUniverse {
        /// Number of courses.
        courses: usize,
        /// Number of rooms.
        rooms: usize,
        /// Number of time slots.
        slots: usize,
    },

    /// A course record is missing a required field or carries an invalid one.
    #[error("course record {index}: missing or invalid `{field}`")]
    MalformedCourse {
        /// Position of the record in the input list.
        index: usize,
        /// Offending field.
        field: &'static str,
    },

    /// A gene references a slot or room that does not exist.
    #[error("gene for course {course} is out of range: slot {slot}, room {room}")]
    GeneOutOfRange {
        /// Course position.
        course: usize,
        /// Slot index.
        slot: usize,
        /// Room index.
        room: usize,
    },

    /// Chromosome length does not match the number of courses.
    #[error("chromosome has {actual} gene(s), expected {expected}")]
    LengthMismatch {
        /// Number of courses.
        expected: usize,
        /// Number of genes supplied.
        actual: usize,
    },
}

impl Error {
    /// Returns `true` for errors caused by invalid run parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::PopulationTooSmall(_)
                | Error::ZeroGenerations
                | Error::RateOutOfRange { .. }
                | Error::TournamentTooLarge { .. }
                | Error::EmptyUniverse { .. }
        )
    }
}

/// Shorthand for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
