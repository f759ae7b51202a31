//! Generic positional genetic operators.
//!
//! These operate on gene slices where position `i` carries a fixed meaning
//! (for timetabling, "the assignment of course `i`"), so recombination must
//! keep every gene at its own position.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: swap tails at one cut point
//!
//! # Mutation Operators
//!
//! - [`random_position`]: pick the locus a point mutation should touch
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover.
///
/// Picks a cut point uniformly from `[1, n - 1]` and returns
/// `(a[..cut] ++ b[cut..], b[..cut] ++ a[cut..])`. Sequences of length 0 or 1
/// have no interior cut point and are returned as copies without consuming
/// randomness.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn one_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n <= 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

/// `head[..cut]` followed by `tail[cut..]`.
fn splice<T: Clone>(head: &[T], tail: &[T], cut: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

// ============================================================================
// Mutation helpers
// ============================================================================

/// Picks a uniformly random position in a sequence of length `n`.
///
/// Returns `None` for an empty sequence.
pub fn random_position<R: Rng>(n: usize, rng: &mut R) -> Option<usize> {
    if n == 0 {
        None
    } else {
        Some(rng.random_range(0..n))
    }
}

// ============================================================================
// Tests
// ============================================================================
