//! Penalty-based fitness for timetables.
//!
//! Fitness starts at [`FITNESS_CEILING`] and loses:
//!
//! | Term | Penalty |
//! |------|---------|
//! | room already taken in that slot | 100 per repeat |
//! | lecturer already teaching in that slot | 100 per repeat |
//! | slot day not in the course's preferred days | 5 × duration |
//! | uneven room usage | 2 × population variance of room counts |
//!
//! A key shared by K courses costs K − 1 repeats: the first course to claim
//! a `(room, slot)` or `(lecturer, slot)` is free.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::chromosome::Chromosome;
use super::model::Timetable;

/// Best attainable fitness.
pub const FITNESS_CEILING: f64 = 1000.0;

/// Penalty per repeated `(room, slot)` claim.
pub const ROOM_CONFLICT_PENALTY: f64 = 100.0;

/// Penalty per repeated `(lecturer, slot)` claim.
pub const LECTURER_CONFLICT_PENALTY: f64 = 100.0;

/// Penalty per duration unit scheduled on a non-preferred day.
pub const PREFERENCE_PENALTY: f64 = 5.0;

/// Weight of the room-usage variance.
pub const BALANCE_WEIGHT: f64 = 2.0;

/// Itemized penalties of one chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessBreakdown {
    /// Number of repeated `(room, slot)` claims.
    pub room_conflicts: usize,
    /// Number of repeated `(lecturer, slot)` claims.
    pub lecturer_conflicts: usize,
    /// Number of courses placed on a non-preferred day.
    pub preference_misses: usize,
    /// Summed preference penalty (`5 × duration` per miss).
    pub preference_penalty: f64,
    /// `2 × variance(room counts)`.
    pub balance_penalty: f64,
}

impl FitnessBreakdown {
    /// Computes the breakdown for `chromosome`.
    ///
    /// # Panics
    /// Panics if `chromosome` was not built for `timetable` (a gene indexes
    /// past the timetable's slots or rooms, or the lengths differ).
    pub fn of(timetable: &Timetable, chromosome: &Chromosome) -> Self {
        assert_eq!(
            chromosome.len(),
            timetable.num_courses(),
            "chromosome does not match timetable"
        );

        let mut room_slot: HashMap<(usize, usize), usize> = HashMap::new();
        let mut lecturer_slot: HashMap<(usize, usize), usize> = HashMap::new();
        let mut breakdown = Self::default();

        for (i, (gene, course)) in chromosome
            .genes()
            .iter()
            .zip(timetable.courses())
            .enumerate()
        {
            match room_slot.entry((gene.room, gene.slot)) {
                Entry::Occupied(_) => breakdown.room_conflicts += 1,
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }

            match lecturer_slot.entry((timetable.lecturer_id(i), gene.slot)) {
                Entry::Occupied(_) => breakdown.lecturer_conflicts += 1,
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }

            let day = timetable.slots()[gene.slot].day();
            if !course.accepts_day(day) {
                breakdown.preference_misses += 1;
                breakdown.preference_penalty += PREFERENCE_PENALTY * course.duration() as f64;
            }
        }

        let counts = room_usage(timetable, chromosome);
        breakdown.balance_penalty = BALANCE_WEIGHT * variance(&counts);
        breakdown
    }

    /// Sum of every penalty term.
    pub fn total_penalty(&self) -> f64 {
        self.room_conflicts as f64 * ROOM_CONFLICT_PENALTY
            + self.lecturer_conflicts as f64 * LECTURER_CONFLICT_PENALTY
            + self.preference_penalty
            + self.balance_penalty
    }

    /// `FITNESS_CEILING - total_penalty()`.
    pub fn fitness(&self) -> f64 {
        FITNESS_CEILING - self.total_penalty()
    }

    /// No room or lecturer is double-booked.
    pub fn is_conflict_free(&self) -> bool {
        self.room_conflicts == 0 && self.lecturer_conflicts == 0
    }
}

/// Fitness of `chromosome`; higher is better, at most [`FITNESS_CEILING`].
pub fn evaluate(timetable: &Timetable, chromosome: &Chromosome) -> f64 {
    FitnessBreakdown::of(timetable, chromosome).fitness()
}

/// Number of courses placed in each room.
pub fn room_usage(timetable: &Timetable, chromosome: &Chromosome) -> Vec<usize> {
    let mut counts = vec![0usize; timetable.num_rooms()];
    for gene in chromosome.genes() {
        counts[gene.room] += 1;
    }
    counts
}

/// Population variance (divisor `n`). Zero for an empty slice.
fn variance(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().sum::<usize>() as f64 / n;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
