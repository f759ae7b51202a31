//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for course timetabling, bridging the
//! [`Timetable`] model to the generic GA runner.

use rand::Rng;

use super::chromosome::Chromosome;
use super::fitness::evaluate;
use super::model::Timetable;
use crate::ga::GaProblem;

/// GA problem over a borrowed [`Timetable`].
///
/// # Example
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::timetable::{Course, CourseRecord, Timetable, TimetableProblem};
///
/// let courses = Course::from_records(vec![
///     CourseRecord::new("IF101", "Algoritma", "Budi"),
///     CourseRecord::new("IF102", "Basis Data", "Sari"),
/// ])?;
/// let timetable = Timetable::weekly(courses)?;
/// let problem = TimetableProblem::new(&timetable);
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(1))?;
/// assert_eq!(result.best.len(), 2);
/// # Ok::<(), u_timetable::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimetableProblem<'a> {
    timetable: &'a Timetable,
}

impl<'a> TimetableProblem<'a> {
    /// Creates the problem.
    pub fn new(timetable: &'a Timetable) -> Self {
        Self { timetable }
    }

    /// The underlying timetable.
    pub fn timetable(&self) -> &'a Timetable {
        self.timetable
    }
}

impl GaProblem for TimetableProblem<'_> {
    type Individual = Chromosome;
    type Fitness = f64;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(self.timetable, rng)
    }

    fn evaluate(&self, individual: &Chromosome) -> f64 {
        evaluate(self.timetable, individual)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        parent1.crossover(parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
        individual.mutate(self.timetable, rng);
    }
}
