//! Genetic Algorithm framework.
//!
//! A generic GA built on trait-based abstractions. A problem implements
//! [`GaProblem`], which specifies how to create, evaluate, recombine, and
//! mutate individuals. Fitness is maximized.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`Evolution`]: State of one run, advanced a generation at a time
//! - [`GaRunner`]: Drives an [`Evolution`] to completion
//! - [`GaResult`]: Best individual, fitness trace, and run metadata
//!
//! # Submodules
//!
//! - [`operators`]: Positional crossover and mutation helpers
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{Evolution, GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem};
