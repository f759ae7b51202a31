//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Selection reads the generation's fitness vector rather than the
//! individuals themselves.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Fitness;
use crate::error::{Error, Result};
use rand::seq::index;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// ```
/// use u_timetable::ga::Selection;
///
/// let sel = Selection::Tournament(3);
/// assert_eq!(sel, Selection::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` distinct individuals, keep the best.
    ///
    /// Entrants are drawn without replacement, so `k` may not exceed the
    /// population size. Ties go to the entrant drawn first.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Checks that the strategy can run on a population of the given size.
    pub fn validate(&self, population_size: usize) -> Result<()> {
        match *self {
            Selection::Tournament(k) => {
                let k = k.max(1);
                if population_size < k {
                    Err(Error::TournamentTooLarge {
                        size: k,
                        population: population_size,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Selects a parent index given the fitness of every individual.
    pub fn select<F: Fitness, R: Rng>(&self, fitnesses: &[F], rng: &mut R) -> Result<usize> {
        self.validate(fitnesses.len())?;
        match *self {
            Selection::Tournament(k) => Ok(tournament(fitnesses, k.max(1), rng)),
        }
    }
}

/// Tournament selection without replacement.
fn tournament<F: Fitness, R: Rng>(fitnesses: &[F], k: usize, rng: &mut R) -> usize {
    let mut entrants = index::sample(rng, fitnesses.len(), k).into_iter();
    // k >= 1 and n >= k, so at least one entrant exists.
    let mut best_idx = entrants.next().unwrap_or(0);
    for idx in entrants {
        if fitnesses[idx] > fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
