//! Course timetabling by genetic search.
//!
//! Assigns every course a `(time slot, room)` pair, minimizing room and
//! lecturer double-bookings while honouring preferred days and spreading
//! courses evenly across rooms.
//!
//! - **GA framework** ([`ga`]): problem trait, configuration, tournament
//!   selection, positional operators, and the generational loop with elitism.
//! - **Timetabling** ([`timetable`]): course/room/slot model, slot-room
//!   chromosome, penalty fitness, and result decoding.
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::timetable::{solve, Course, CourseRecord, Timetable};
//!
//! let courses = Course::from_records(vec![
//!     CourseRecord::new("IF101", "Algoritma", "Budi").with_preferred_day("Senin"),
//!     CourseRecord::new("IF102", "Basis Data", "Sari"),
//!     CourseRecord::new("IF103", "Jaringan", "Budi").with_duration(2),
//! ])?;
//! let timetable = Timetable::weekly(courses)?;
//!
//! let solution = solve(&timetable, &GaConfig::default().with_seed(42))?;
//! assert_eq!(solution.fitness_history.len(), 100);
//! for row in solution.rows(&timetable) {
//!     println!("{} {} {}", row.course_id, row.slot_label, row.room_label);
//! }
//! # Ok::<(), u_timetable::Error>(())
//! ```
//!
//! # Logging
//!
//! Runs emit [`tracing`] events: `info` at start and end of a run, `debug`
//! per generation, `warn` for an empty course list. Install a subscriber to
//! see them.
//!
//! # Features
//!
//! - `parallel`: evaluate each generation with rayon
//!   (see [`GaConfig::parallel`](ga::GaConfig::parallel))
//! - `serde`: derive `Serialize`/`Deserialize` for configuration, course
//!   records, genes, and schedule rows

pub mod error;
pub mod ga;
pub mod random;
pub mod timetable;

pub use error::{Error, Result};
