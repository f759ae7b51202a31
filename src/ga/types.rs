//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and a
//! concrete problem such as course timetabling. Fitness values are kept by the
//! runner in a vector parallel to the population, never on the individuals.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and the history trace.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into two children
/// 4. **Mutation**: how to perturb one child
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate a
/// generation in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Clone + Send + Sync;

    /// The fitness type. Higher is better.
    type Fitness: Fitness;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Must be a pure function of its input.
    fn evaluate(&self, individual: &Self::Individual) -> Self::Fitness;

    /// Produces two offspring by recombining two parents.
    ///
    /// Parents are borrowed and never modified. The default implementation
    /// returns clones of both parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1.clone(), parent2.clone())
    }

    /// Mutates a freshly produced child in place.
    ///
    /// The runner only ever passes children it owns exclusively for the
    /// current reproduction step. The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with that generation's best
    /// fitness. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Self::Fitness) {}
}
