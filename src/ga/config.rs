//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Recommended range: 10–500.
    pub population_size: usize,

    /// Number of generations. The run always executes exactly this many
    /// unless cancelled.
    ///
    /// Recommended range: 10–2000.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Fraction of the population preserved as elites.
    ///
    /// The elite count is `max(1, round(population_size * elite_ratio))`.
    pub elite_ratio: f64,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are cloned.
    pub crossover_rate: f64,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate a generation in parallel using rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            selection: Selection::default(),
            elite_ratio: 0.02,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Sets the crossover rate. Values outside `[0, 1]` fail validation.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Values outside `[0, 1]` fail validation.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals copied unchanged into each new generation.
    pub fn elite_count(&self) -> usize {
        let raw = (self.population_size as f64 * self.elite_ratio).round() as usize;
        raw.max(1).min(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(Error::ZeroGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("elite_ratio", self.elite_ratio)?;
        self.selection.validate(self.population_size)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::RateOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!((config.elite_ratio - 0.02).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_tournament_size(5)
            .with_elite_ratio(0.1)
            .with_crossover_rate(0.6)
            .with_mutation_rate(0.05)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.selection, Selection::Tournament(5));
        assert!((config.elite_ratio - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.6).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(Error::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(Error::ZeroGenerations));
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        let err = GaConfig::default().with_mutation_rate(1.5).validate();
        assert!(matches!(
            err,
            Err(Error::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));

        let err = GaConfig::default().with_crossover_rate(-0.1).validate();
        assert!(matches!(
            err,
            Err(Error::RateOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));

        let err = GaConfig::default().with_crossover_rate(f64::NAN).validate();
        assert!(err.is_err());
    }

    #[test]
    fn test_validate_rate_bounds_inclusive() {
        let config = GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_tournament_larger_than_population() {
        // Two individuals cannot host a tournament of three distinct entrants.
        let config = GaConfig::default().with_population_size(2);
        assert_eq!(
            config.validate(),
            Err(Error::TournamentTooLarge {
                size: 3,
                population: 2
            })
        );
        assert!(config.with_tournament_size(2).validate().is_ok());
    }

    #[test]
    fn test_elite_count_rounds_with_floor_of_one() {
        assert_eq!(GaConfig::default().with_population_size(20).elite_count(), 1);
        assert_eq!(GaConfig::default().with_population_size(50).elite_count(), 1);
        assert_eq!(GaConfig::default().with_population_size(75).elite_count(), 2);
        assert_eq!(GaConfig::default().with_population_size(100).elite_count(), 2);
        assert_eq!(GaConfig::default().with_population_size(500).elite_count(), 10);
    }

    #[test]
    fn test_elite_count_never_exceeds_population() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_elite_ratio(1.0);
        assert_eq!(config.elite_count(), 4);
    }
}
