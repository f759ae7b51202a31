//! Course timetabling on top of the GA framework.
//!
//! Each course is assigned one `(slot, room)` pair. A candidate timetable is a
//! [`Chromosome`] with one [`Gene`] per course, scored by
//! [`fitness::evaluate`] (higher is better, at most 1000).
//!
//! # Key Types
//!
//! - [`Timetable`]: courses, rooms, and slots for one run
//! - [`Chromosome`]: one candidate assignment
//! - [`TimetableProblem`]: [`GaProblem`](crate::ga::GaProblem) adapter
//! - [`Solution`]: best timetable, penalty breakdown, and fitness trace

mod chromosome;
pub mod fitness;
mod model;
mod problem;
mod solver;

pub use chromosome::{initialize_population, Chromosome, Gene};
pub use fitness::{evaluate, FitnessBreakdown, FITNESS_CEILING};
pub use model::{Course, CourseRecord, Room, TimeSlot, Timetable};
pub use problem::TimetableProblem;
pub use solver::{solve, solve_with_cancel, ScheduleRow, Solution};
