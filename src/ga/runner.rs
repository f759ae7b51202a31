//! GA evolutionary loop execution.
//!
//! [`Evolution`] holds the state of one run and advances it one generation at
//! a time: evaluation → elitism → reproduction → replacement. [`GaRunner`]
//! drives an [`Evolution`] for the configured number of generations.

use super::config::GaConfig;
use super::types::{Fitness, GaProblem};
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I, F> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: F,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each generation, one entry per executed generation.
    pub fitness_history: Vec<f64>,

    /// Seed the run was started with.
    pub seed: u64,
}

/// State of a single GA run.
///
/// Created already initialized and evaluated; each [`step`](Self::step)
/// produces the next generation. The population is replaced wholesale on
/// every step, so individuals from different generations never alias.
pub struct Evolution<'p, P: GaProblem> {
    problem: &'p P,
    config: GaConfig,
    rng: StdRng,
    seed: u64,
    population: Vec<P::Individual>,
    fitnesses: Vec<P::Fitness>,
    best: Option<(P::Individual, P::Fitness)>,
    history: Vec<f64>,
    generation: usize,
}

impl<'p, P: GaProblem> Evolution<'p, P> {
    /// Validates the configuration, then creates and evaluates the initial
    /// population.
    pub fn new(problem: &'p P, config: &GaConfig) -> Result<Self> {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        let fitnesses = evaluate_population(problem, &population, config.parallel);

        Ok(Self {
            problem,
            config: config.clone(),
            rng,
            seed,
            population,
            fitnesses,
            best: None,
            history: Vec::with_capacity(config.max_generations),
            generation: 0,
        })
    }

    /// Current population.
    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Fitness of each individual in [`population`](Self::population).
    pub fn fitnesses(&self) -> &[P::Fitness] {
        &self.fitnesses
    }

    /// Number of generations produced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Seed the run was started with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Best individual seen in any produced generation.
    pub fn best(&self) -> Option<(&P::Individual, P::Fitness)> {
        self.best.as_ref().map(|(ind, fit)| (ind, *fit))
    }

    /// Whether the configured number of generations has been produced.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    /// Indices of the individuals that survive unchanged into the next
    /// generation, best first.
    pub fn elite_indices(&self) -> Vec<usize> {
        let mut order = ranked_indices(&self.fitnesses);
        order.truncate(self.config.elite_count());
        order
    }

    /// Produces the next generation and returns its best fitness.
    pub fn step(&mut self) -> Result<P::Fitness> {
        let n = self.config.population_size;
        let mutation_rate = self.config.mutation_rate;

        // Elitism
        let mut next_gen: Vec<P::Individual> = Vec::with_capacity(n);
        for idx in self.elite_indices() {
            next_gen.push(self.population[idx].clone());
        }

        // Reproduction
        while next_gen.len() < n {
            let p1 = self.config.selection.select(&self.fitnesses, &mut self.rng)?;
            let p2 = self.config.selection.select(&self.fitnesses, &mut self.rng)?;

            let (mut child1, mut child2) =
                if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                    self.problem
                        .crossover(&self.population[p1], &self.population[p2], &mut self.rng)
                } else {
                    (self.population[p1].clone(), self.population[p2].clone())
                };

            if self.rng.random_range(0.0..1.0) < mutation_rate {
                self.problem.mutate(&mut child1, &mut self.rng);
            }
            // The draw is always made; the mutation only applies when the
            // second child will still fit after the first is appended.
            if self.rng.random_range(0.0..1.0) < mutation_rate && next_gen.len() + 1 < n {
                self.problem.mutate(&mut child2, &mut self.rng);
            }

            next_gen.push(child1);
            if next_gen.len() < n {
                next_gen.push(child2);
            }
        }

        // Replacement
        self.population = next_gen;
        self.fitnesses = evaluate_population(self.problem, &self.population, self.config.parallel);
        self.generation += 1;

        let gen_best_idx = first_best(&self.fitnesses);
        let gen_best = self.fitnesses[gen_best_idx];
        self.history.push(gen_best.to_f64());

        let improved = match &self.best {
            Some((_, best_fitness)) => gen_best > *best_fitness,
            None => true,
        };
        if improved {
            self.best = Some((self.population[gen_best_idx].clone(), gen_best));
        }

        debug!(
            generation = self.generation,
            best = gen_best.to_f64(),
            improved,
            "generation complete"
        );
        self.problem.on_generation(self.generation, gen_best);

        Ok(gen_best)
    }

    /// Consumes the run and returns its result.
    pub fn into_result(self, cancelled: bool) -> GaResult<P::Individual, P::Fitness> {
        let (best, best_fitness) = match self.best {
            Some(best) => best,
            // Cancelled before the first generation: fall back to the
            // initial population, which is never empty.
            None => {
                let idx = first_best(&self.fitnesses);
                (self.population[idx].clone(), self.fitnesses[idx])
            }
        };

        GaResult {
            best,
            best_fitness,
            generations: self.generation,
            cancelled,
            fitness_history: self.history,
            seed: self.seed,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for exactly `config.max_generations` generations.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual, P::Fitness>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked once per generation boundary. When it is set the
    /// run stops and returns the best solution found so far, with a
    /// correspondingly shorter history.
    #[instrument(
        skip_all,
        fields(
            population = config.population_size,
            generations = config.max_generations
        )
    )]
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual, P::Fitness>> {
        let mut evolution = Evolution::new(problem, config)?;
        info!(seed = evolution.seed(), "starting GA run");

        let mut cancelled = false;
        while !evolution.is_finished() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            evolution.step()?;
        }

        let result = evolution.into_result(cancelled);
        info!(
            best = result.best_fitness.to_f64(),
            generations = result.generations,
            cancelled,
            "GA run finished"
        );
        Ok(result)
    }
}

/// Evaluate every individual, preserving population order.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    parallel: bool,
) -> Vec<P::Fitness> {
    if parallel {
        population.par_iter().map(|ind| problem.evaluate(ind)).collect()
    } else {
        population.iter().map(|ind| problem.evaluate(ind)).collect()
    }
}

/// Evaluate every individual, preserving population order.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    _parallel: bool,
) -> Vec<P::Fitness> {
    population.iter().map(|ind| problem.evaluate(ind)).collect()
}

/// Population indices sorted best first; equal fitness keeps index order.
fn ranked_indices<F: Fitness>(fitnesses: &[F]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitnesses.len()).collect();
    order.sort_by(|&a, &b| {
        fitnesses[b]
            .partial_cmp(&fitnesses[a])
            .unwrap_or(CmpOrdering::Equal)
    });
    order
}

/// Index of the first maximum.
fn first_best<F: Fitness>(fitnesses: &[F]) -> usize {
    let mut best = 0;
    for (i, f) in fitnesses.iter().enumerate().skip(1) {
        if *f > fitnesses[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
