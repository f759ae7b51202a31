//! One-call timetabling and result decoding.
//!
//! [`solve`] runs the GA over a [`Timetable`] and packages the outcome as a
//! [`Solution`] the presentation layer can chart ([`Solution::fitness_history`])
//! and tabulate ([`Solution::rows`]).

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::chromosome::Chromosome;
use super::fitness::FitnessBreakdown;
use super::model::Timetable;
use super::problem::TimetableProblem;
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};

/// One line of a decoded timetable.
///
/// With the `serde` feature the field names follow the export columns
/// `CourseID, CourseName, Dosen, Durasi, Slot, Ruang`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRow {
    #[cfg_attr(feature = "serde", serde(rename = "CourseID"))]
    pub course_id: String,
    #[cfg_attr(feature = "serde", serde(rename = "CourseName"))]
    pub course_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Dosen"))]
    pub lecturer: String,
    #[cfg_attr(feature = "serde", serde(rename = "Durasi"))]
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Slot"))]
    pub slot_label: String,
    #[cfg_attr(feature = "serde", serde(rename = "Ruang"))]
    pub room_label: String,
}

impl ScheduleRow {
    /// Decodes every gene of `chromosome` into a row, in course order.
    pub fn decode(timetable: &Timetable, chromosome: &Chromosome) -> Vec<ScheduleRow> {
        chromosome
            .genes()
            .iter()
            .zip(timetable.courses())
            .map(|(gene, course)| ScheduleRow {
                course_id: course.id().to_string(),
                course_name: course.name().to_string(),
                lecturer: course.lecturer().to_string(),
                duration: course.duration(),
                slot_label: timetable.slots()[gene.slot].label().to_string(),
                room_label: timetable.rooms()[gene.room].label().to_string(),
            })
            .collect()
    }
}

/// Outcome of a timetabling run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Best timetable found in any generation.
    pub chromosome: Chromosome,
    /// Fitness of `chromosome`.
    pub best_fitness: f64,
    /// Itemized penalties of `chromosome`.
    pub breakdown: FitnessBreakdown,
    /// Best fitness of each generation.
    pub fitness_history: Vec<f64>,
    /// Generations executed.
    pub generations: usize,
    /// Whether the run was cancelled before completing.
    pub cancelled: bool,
    /// Seed that reproduces this run.
    pub seed: u64,
}

impl Solution {
    /// Human-readable rows for the best timetable.
    pub fn rows(&self, timetable: &Timetable) -> Vec<ScheduleRow> {
        ScheduleRow::decode(timetable, &self.chromosome)
    }
}

/// Runs the GA over `timetable` for exactly `config.max_generations`
/// generations.
pub fn solve(timetable: &Timetable, config: &GaConfig) -> Result<Solution> {
    solve_with_cancel(timetable, config, None)
}

/// Like [`solve`], stopping early when `cancel` is set.
pub fn solve_with_cancel(
    timetable: &Timetable,
    config: &GaConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Solution> {
    let problem = TimetableProblem::new(timetable);
    let result = GaRunner::run_with_cancel(&problem, config, cancel)?;
    let breakdown = FitnessBreakdown::of(timetable, &result.best);

    Ok(Solution {
        chromosome: result.best,
        best_fitness: result.best_fitness,
        breakdown,
        fitness_history: result.fitness_history,
        generations: result.generations,
        cancelled: result.cancelled,
        seed: result.seed,
    })
}
