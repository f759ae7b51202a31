//! Slot/room chromosome for course timetabling.
//!
//! # Encoding
//!
//! One [`Gene`] per course: gene `i` is the `(slot, room)` assignment of
//! course `i`. The gene array is boxed so its length cannot change after
//! construction, and every gene is within the timetable's bounds.

use rand::Rng;

use super::model::Timetable;
use crate::error::{Error, Result};
use crate::ga::operators::{one_point_crossover, random_position};

/// Assignment of a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Time slot index in `[0, S)`.
    pub slot: usize,
    /// Room index in `[0, R)`.
    pub room: usize,
}

impl Gene {
    /// Creates a gene.
    pub fn new(slot: usize, room: usize) -> Self {
        Self { slot, room }
    }

    fn random<R: Rng>(timetable: &Timetable, rng: &mut R) -> Self {
        Self {
            slot: rng.random_range(0..timetable.num_slots()),
            room: rng.random_range(0..timetable.num_rooms()),
        }
    }
}

/// A complete candidate timetable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Box<[Gene]>,
}

impl Chromosome {
    /// Creates a random chromosome: slot and room drawn uniformly per course,
    /// in course order.
    pub fn random<R: Rng>(timetable: &Timetable, rng: &mut R) -> Self {
        let genes = (0..timetable.num_courses())
            .map(|_| Gene::random(timetable, rng))
            .collect();
        Self { genes }
    }

    /// Builds a chromosome from explicit genes, checking length and bounds.
    pub fn from_genes(genes: Vec<Gene>, timetable: &Timetable) -> Result<Self> {
        if genes.len() != timetable.num_courses() {
            return Err(Error::LengthMismatch {
                expected: timetable.num_courses(),
                actual: genes.len(),
            });
        }
        for (course, gene) in genes.iter().enumerate() {
            if gene.slot >= timetable.num_slots() || gene.room >= timetable.num_rooms() {
                return Err(Error::GeneOutOfRange {
                    course,
                    slot: gene.slot,
                    room: gene.room,
                });
            }
        }
        Ok(Self {
            genes: genes.into_boxed_slice(),
        })
    }

    /// Genes in course order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Number of genes (equals the number of courses).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// One-point crossover. Parents are untouched; both children are new.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let (a, b) = one_point_crossover(self.genes(), other.genes(), rng);
        (
            Self {
                genes: a.into_boxed_slice(),
            },
            Self {
                genes: b.into_boxed_slice(),
            },
        )
    }

    /// Point mutation: one random gene gets a fresh slot or, with equal
    /// probability, a fresh room. The other field and every other gene are
    /// left alone. An empty chromosome is unchanged.
    pub fn mutate<R: Rng>(&mut self, timetable: &Timetable, rng: &mut R) {
        let Some(idx) = random_position(self.genes.len(), rng) else {
            return;
        };
        let gene = &mut self.genes[idx];
        if rng.random_bool(0.5) {
            gene.slot = rng.random_range(0..timetable.num_slots());
        } else {
            gene.room = rng.random_range(0..timetable.num_rooms());
        }
    }
}

/// Creates `n` independent random chromosomes.
pub fn initialize_population<R: Rng>(
    timetable: &Timetable,
    n: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    (0..n).map(|_| Chromosome::random(timetable, rng)).collect()
}
