//! Genetic operators over timetables.
//!
//! Crossover recombines parents position by position, so a section's
//! assignment always comes from one of its parents at the same position
//! and course identity is preserved by construction. Mutation redraws
//! whole assignments through the sampler used at initialization.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

use crate::ga::chromosome::{Assignment, Timetable};
use crate::models::ProblemDefinition;

/// Crossover scheme for recombining two parent timetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// One cut point in `1..len`: positions before the cut come from the
    /// first parent, the rest from the second.
    ///
    /// # Complexity
    /// O(n)
    SinglePoint,

    /// A fair coin per position picks the donor parent.
    ///
    /// # Complexity
    /// O(n)
    Uniform,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::SinglePoint
    }
}

impl Crossover {
    /// Produces one child of the parents' common length.
    ///
    /// Length-1 parents have no interior cut point; the first parent is
    /// cloned.
    ///
    /// # Panics
    /// Panics if the parents have different lengths or are empty.
    pub fn recombine<R: Rng>(&self, a: &Timetable, b: &Timetable, rng: &mut R) -> Timetable {
        let n = a.len();
        assert_eq!(n, b.len(), "parents must have equal length");
        assert!(n > 0, "parents must not be empty");

        if n == 1 {
            return a.clone();
        }

        let assignments = match self {
            Crossover::SinglePoint => {
                let cut = rng.random_range(1..n);
                a.assignments[..cut]
                    .iter()
                    .chain(&b.assignments[cut..])
                    .copied()
                    .collect()
            }
            Crossover::Uniform => a
                .assignments
                .iter()
                .zip(&b.assignments)
                .map(|(x, y)| if rng.random_bool(0.5) { *x } else { *y })
                .collect(),
        };

        Timetable { assignments }
    }
}

/// Mutates a timetable in place.
///
/// Each assignment is independently redrawn with probability `rate`
/// through [`Assignment::random_for`], keeping its section fixed. An
/// unlucky redraw may reproduce the old assignment; that still counts as
/// the mutation attempt.
pub fn mutate<R: Rng>(
    timetable: &mut Timetable,
    problem: &ProblemDefinition,
    rate: f64,
    rng: &mut R,
) {
    for assignment in &mut timetable.assignments {
        if rng.random_range(0.0..1.0) < rate {
            *assignment = Assignment::random_for(assignment.course, problem, rng);
        }
    }
}
